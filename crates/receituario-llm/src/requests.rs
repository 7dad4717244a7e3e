//! Typed request functions, one per clinical feature.
//!
//! Functions differ deliberately in how they handle a malformed model
//! response: autocomplete and interaction checks degrade to empty (they
//! back non-blocking UI affordances), while score calculation and label
//! lookup fail loudly (their output is the whole feature).

use receituario_core::models::{
    ClinicalCalculationResult, DrugInfo, GroundingSource, Interaction, InteractionCheckResult,
    PrescriptionContext, PrescriptionGenerationData,
};
use serde::Deserialize;

use crate::client::{GatewayError, GatewayResult, GenerateRequest, LlmClient};
use crate::{prompts, schemas};

/// Request a prescription template for a diagnosis.
///
/// Returns the raw response text; callers validate it through
/// `receituario_core::normalize::normalize_prescription`.
pub fn fetch_prescription_template(
    client: &dyn LlmClient,
    diagnosis: &str,
    context: PrescriptionContext,
) -> GatewayResult<String> {
    let request = GenerateRequest::json(
        prompts::prescription_template(diagnosis, context),
        schemas::prescription_template(),
    );
    Ok(client.generate(&request)?.text)
}

/// Check the selected medications for interactions.
///
/// Only clinically relevant interactions (risk above A) are returned. A
/// malformed response degrades to "no interactions found".
pub fn check_interactions(
    client: &dyn LlmClient,
    medication_names: &[String],
) -> GatewayResult<Vec<Interaction>> {
    if medication_names.len() < 2 {
        return Ok(Vec::new());
    }

    let request = GenerateRequest::json(
        prompts::interaction_check(medication_names),
        schemas::interaction_check(),
    );
    let response = client.generate(&request)?;

    let result: InteractionCheckResult = match parse_json_response(&response.text) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable interaction response, reporting none");
            InteractionCheckResult::default()
        }
    };
    Ok(result.clinically_relevant())
}

/// Generate the free-text simple prescription document.
pub fn generate_simple_prescription(
    client: &dyn LlmClient,
    data: &PrescriptionGenerationData,
) -> GatewayResult<String> {
    let request = GenerateRequest::text(prompts::simple_prescription(data));
    Ok(client.generate(&request)?.text)
}

/// Suggest diagnosis completions for a partial input.
///
/// Degrades to an empty list on a malformed response.
pub fn autocomplete_diagnoses(
    client: &dyn LlmClient,
    partial: &str,
    specialty: &str,
) -> GatewayResult<Vec<String>> {
    #[derive(Deserialize)]
    struct Suggestions {
        suggestions: Vec<String>,
    }

    let request = GenerateRequest::json(
        prompts::diagnosis_autocomplete(partial, specialty),
        schemas::diagnosis_autocomplete(),
    );
    let response = client.generate(&request)?;

    match parse_json_response::<Suggestions>(&response.text) {
        Ok(parsed) => Ok(parsed.suggestions),
        Err(e) => {
            tracing::warn!(error = %e, "unparseable autocomplete response, returning empty");
            Ok(Vec::new())
        }
    }
}

/// Run a clinical-score calculation.
///
/// Fails on a malformed response; a wrong score is worse than no score.
pub fn calculate_clinical_score(
    client: &dyn LlmClient,
    calculator_name: &str,
    inputs: &[(String, String)],
) -> GatewayResult<ClinicalCalculationResult> {
    let request = GenerateRequest::json(
        prompts::clinical_score(calculator_name, inputs),
        schemas::clinical_score(),
    );
    let response = client.generate(&request)?;
    parse_json_response(&response.text)
}

/// Fetch drug information from the AI gateway in the openFDA layout.
///
/// Used when openFDA has no label, which is the rule for Brazilian
/// commercial names. The generic name is backfilled from the query when
/// the model omits it. Fails on a malformed response.
pub fn fetch_drug_info(
    client: &dyn LlmClient,
    medication_name: &str,
) -> GatewayResult<DrugInfo> {
    let request = GenerateRequest::json(
        prompts::drug_info(medication_name),
        schemas::drug_info(),
    );
    let response = client.generate(&request)?;

    let mut info: DrugInfo = parse_json_response(&response.text)?;
    if info.generic_name.as_deref().map_or(true, str::is_empty) {
        info.generic_name = Some(medication_name.to_string());
    }
    Ok(info)
}

/// A grounded-search answer with its cited sources.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundedAnswer {
    pub summary: String,
    pub sources: Vec<GroundingSource>,
}

/// Ask a clinical question with Google Search grounding.
pub fn grounded_search(client: &dyn LlmClient, query: &str) -> GatewayResult<GroundedAnswer> {
    let request = GenerateRequest::grounded(prompts::grounded_question(query));
    let response = client.generate(&request)?;

    if response.text.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }
    Ok(GroundedAnswer {
        summary: response.text,
        sources: response.sources,
    })
}

/// Parse a JSON body out of a model response, tolerating stray prose
/// around the outermost object.
fn parse_json_response<T: serde::de::DeserializeOwned>(text: &str) -> GatewayResult<T> {
    let start = text
        .find('{')
        .ok_or_else(|| GatewayError::Parse("no JSON object in response".into()))?;
    let end = text
        .rfind('}')
        .ok_or_else(|| GatewayError::Parse("unterminated JSON object in response".into()))?;
    if end < start {
        return Err(GatewayError::Parse(
            "braces out of order in response".into(),
        ));
    }

    serde_json::from_str(&text[start..=end]).map_err(|e| GatewayError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::LlmResponse;
    use receituario_core::models::RiskLevel;

    /// Canned-response client capturing the last request.
    struct MockLlm {
        response: GatewayResult<LlmResponse>,
    }

    impl MockLlm {
        fn text(text: &str) -> Self {
            Self {
                response: Ok(LlmResponse {
                    text: text.to_string(),
                    sources: Vec::new(),
                }),
            }
        }
    }

    impl LlmClient for MockLlm {
        fn generate(&self, _request: &GenerateRequest) -> GatewayResult<LlmResponse> {
            match &self.response {
                Ok(r) => Ok(r.clone()),
                Err(GatewayError::RateLimited) => Err(GatewayError::RateLimited),
                Err(e) => Err(GatewayError::Parse(e.to_string())),
            }
        }
    }

    #[test]
    fn test_interactions_filtered_to_relevant() {
        let client = MockLlm::text(
            r#"{"interactions": [
                {"drugs": ["A", "B"], "description": "leve", "recommendation": "nada", "riskLevel": "A"},
                {"drugs": ["C", "D"], "description": "grave", "recommendation": "evitar", "riskLevel": "D"}
            ]}"#,
        );

        let names = vec!["C".to_string(), "D".to_string()];
        let interactions = check_interactions(&client, &names).unwrap();
        assert_eq!(interactions.len(), 1);
        assert_eq!(interactions[0].risk_level, RiskLevel::D);
    }

    #[test]
    fn test_interactions_skip_call_below_two_drugs() {
        let client = MockLlm {
            response: Err(GatewayError::RateLimited),
        };
        let names = vec!["Dipirona".to_string()];
        assert!(check_interactions(&client, &names).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_interaction_response_degrades_to_empty() {
        let client = MockLlm::text("não consegui analisar");
        let names = vec!["A".to_string(), "B".to_string()];
        assert!(check_interactions(&client, &names).unwrap().is_empty());
    }

    #[test]
    fn test_brace_noise_degrades_to_empty() {
        // A closing brace before any opening brace must not slice.
        let client = MockLlm::text("} nenhum dado {");
        let names = vec!["A".to_string(), "B".to_string()];
        assert!(check_interactions(&client, &names).unwrap().is_empty());
        assert!(autocomplete_diagnoses(&client, "x", "y").unwrap().is_empty());
    }

    #[test]
    fn test_brace_noise_fails_strict_parsers() {
        let client = MockLlm::text("} sem estrutura {");
        assert!(matches!(
            calculate_clinical_score(&client, "CHA2DS2-VASc", &[]),
            Err(GatewayError::Parse(_))
        ));
    }

    #[test]
    fn test_autocomplete_parses_suggestions() {
        let client = MockLlm::text(r#"{"suggestions": ["Pneumonia", "Pneumotórax"]}"#);
        let result = autocomplete_diagnoses(&client, "pneu", "Clínica Médica").unwrap();
        assert_eq!(result, vec!["Pneumonia", "Pneumotórax"]);
    }

    #[test]
    fn test_autocomplete_degrades_to_empty() {
        let client = MockLlm::text("sem json aqui");
        assert!(autocomplete_diagnoses(&client, "x", "y").unwrap().is_empty());
    }

    #[test]
    fn test_clinical_score_fails_on_malformed_response() {
        let client = MockLlm::text("resposta sem estrutura");
        let result = calculate_clinical_score(&client, "CHA2DS2-VASc", &[]);
        assert!(matches!(result, Err(GatewayError::Parse(_))));
    }

    #[test]
    fn test_clinical_score_parses_result() {
        let client = MockLlm::text(
            r#"{"score": "4 pontos", "interpretation": "Anticoagular", "formula": "CHA2DS2-VASc"}"#,
        );
        let result = calculate_clinical_score(&client, "CHA2DS2-VASc", &[]).unwrap();
        assert_eq!(result.score, "4 pontos");
    }

    #[test]
    fn test_parse_tolerates_surrounding_prose() {
        let client = MockLlm::text(
            "Aqui está o resultado:\n{\"suggestions\": [\"Asma Aguda\"]}\nEspero ter ajudado.",
        );
        let result = autocomplete_diagnoses(&client, "asm", "Clínica Médica").unwrap();
        assert_eq!(result, vec!["Asma Aguda"]);
    }

    #[test]
    fn test_drug_info_backfills_generic_name() {
        let client = MockLlm::text(r#"{"warnings": ["Evitar em gestantes."]}"#);
        let info = fetch_drug_info(&client, "dipirona").unwrap();
        assert_eq!(info.generic_name.as_deref(), Some("dipirona"));
    }

    #[test]
    fn test_drug_info_fails_on_malformed_response() {
        let client = MockLlm::text("sem json");
        assert!(matches!(
            fetch_drug_info(&client, "dipirona"),
            Err(GatewayError::Parse(_))
        ));
    }

    #[test]
    fn test_grounded_search_rejects_empty_summary() {
        let client = MockLlm::text("   ");
        assert!(matches!(
            grounded_search(&client, "dose de amoxicilina"),
            Err(GatewayError::EmptyResponse)
        ));
    }

    #[test]
    fn test_rate_limit_propagates() {
        let client = MockLlm {
            response: Err(GatewayError::RateLimited),
        };
        let result = fetch_prescription_template(
            &client,
            "Asma Aguda",
            PrescriptionContext::Ambulatorial,
        );
        assert!(matches!(result, Err(GatewayError::RateLimited)));
    }
}
