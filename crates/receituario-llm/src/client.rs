//! Gemini generateContent client.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use receituario_core::models::GroundingSource;

/// Model used for every request.
pub const MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gateway errors.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API key not configured (set {API_KEY_ENV})")]
    MissingApiKey,

    #[error("request timed out")]
    Timeout,

    #[error("could not reach the AI service")]
    Connection,

    #[error("rate limit exceeded, try again shortly")]
    RateLimited,

    #[error("AI service returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("AI response contained no candidates")]
    EmptyResponse,

    #[error("AI response could not be parsed: {0}")]
    Parse(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::Connection
        } else {
            GatewayError::Http(e.to_string())
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// One generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub prompt: String,
    /// When set, asks for `application/json` output against this schema
    pub response_schema: Option<Value>,
    /// Enable the Google Search tool for grounded answers
    pub google_search: bool,
}

impl GenerateRequest {
    /// Free-text request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Structured-JSON request constrained by `schema`.
    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
            google_search: false,
        }
    }

    /// Search-grounded free-text request.
    pub fn grounded(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
            google_search: true,
        }
    }
}

/// Generation result: concatenated text plus any grounding sources.
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

/// Abstraction over the generative backend, mockable in tests.
pub trait LlmClient {
    fn generate(&self, request: &GenerateRequest) -> GatewayResult<LlmResponse>;
}

/// Blocking HTTP client for the Gemini API.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> GatewayResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GatewayError::MissingApiKey)?;
        Self::new(api_key)
    }

    pub fn new(api_key: String) -> GatewayResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        Ok(Self { http, api_key })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent?key={}", API_BASE, MODEL, self.api_key)
    }

    fn build_body(request: &GenerateRequest) -> Value {
        let mut body = serde_json::json!({
            "contents": [{"parts": [{"text": request.prompt}]}]
        });

        if let Some(schema) = &request.response_schema {
            body["generationConfig"] = serde_json::json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }
        if request.google_search {
            body["tools"] = serde_json::json!([{"googleSearch": {}}]);
        }
        body
    }
}

impl LlmClient for GeminiClient {
    fn generate(&self, request: &GenerateRequest) -> GatewayResult<LlmResponse> {
        tracing::debug!(grounded = request.google_search, "sending generateContent request");

        let response = self
            .http
            .post(self.endpoint())
            .json(&Self::build_body(request))
            .send()?;

        let status = response.status();
        if status.as_u16() == 429 {
            tracing::warn!("rate limited by the AI service");
            return Err(GatewayError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json()?;
        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or(GatewayError::EmptyResponse)?;

        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        let sources = candidate
            .grounding_metadata
            .map(|meta| {
                meta.grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .filter(|web| !web.uri.is_empty() && !web.title.is_empty())
                    .map(|web| GroundingSource {
                        uri: web.uri,
                        title: web.title,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(LlmResponse { text, sources })
    }
}

// Wire shapes for the slice of the API we consume.

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
    #[serde(rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroundingMetadata {
    #[serde(rename = "groundingChunks", default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    #[serde(default)]
    uri: String,
    #[serde(default)]
    title: String,
}
