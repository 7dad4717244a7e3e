//! AI gateway for prescription authoring.
//!
//! Wraps the Gemini generateContent API behind a small client trait and
//! exposes one typed request function per clinical feature: template
//! suggestion, interaction check, simple-prescription text, diagnosis
//! autocomplete, clinical-score calculation and grounded web search.
//! Drug-label lookup goes to openFDA instead and lives in [`openfda`].
//!
//! Raw template responses are returned as text; structural validation is
//! the caller's job via `receituario_core::normalize`.

pub mod client;
pub mod openfda;
pub mod prompts;
pub mod requests;
pub mod schemas;

pub use client::{GatewayError, GeminiClient, GenerateRequest, LlmClient, LlmResponse};
pub use requests::*;
