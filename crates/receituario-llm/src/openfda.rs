//! Drug-label lookup against the openFDA API.
//!
//! Labels are fetched by generic name from the public drug/label
//! endpoint. No API key is required at low request volumes.

use receituario_core::models::DrugInfo;
use serde::Deserialize;

use crate::client::{GatewayError, GatewayResult};

const LABEL_ENDPOINT: &str = "https://api.fda.gov/drug/label.json";

#[derive(Debug, Deserialize)]
struct LabelResponse {
    #[serde(default)]
    results: Vec<LabelRecord>,
}

#[derive(Debug, Deserialize)]
struct LabelRecord {
    #[serde(default)]
    openfda: OpenFdaFields,
    indications_and_usage: Option<Vec<String>>,
    warnings: Option<Vec<String>>,
    dosage_and_administration: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenFdaFields {
    generic_name: Option<Vec<String>>,
}

/// Fetch label sections for a drug by generic name.
///
/// `Ok(None)` means openFDA has no label for that name, which is common
/// for Brazilian commercial names; callers fall back to the AI gateway.
pub fn fetch_label(http: &reqwest::blocking::Client, generic_name: &str) -> GatewayResult<Option<DrugInfo>> {
    let response = http
        .get(LABEL_ENDPOINT)
        .query(&[
            ("search", format!("openfda.generic_name:\"{}\"", generic_name)),
            ("limit", "1".to_string()),
        ])
        .send()?;

    // openFDA answers 404 for "no matching records".
    if response.status().as_u16() == 404 {
        return Ok(None);
    }
    if !response.status().is_success() {
        return Err(GatewayError::Api {
            status: response.status().as_u16(),
            message: response.text().unwrap_or_default(),
        });
    }

    let parsed: LabelResponse = response.json()?;
    let Some(record) = parsed.results.into_iter().next() else {
        return Ok(None);
    };

    Ok(Some(into_drug_info(record, generic_name)))
}

/// Map a label record to the domain shape, backfilling the generic name
/// from the query when the record omits it.
fn into_drug_info(record: LabelRecord, queried_name: &str) -> DrugInfo {
    let generic_name = record
        .openfda
        .generic_name
        .and_then(|names| names.into_iter().next())
        .unwrap_or_else(|| queried_name.to_string());

    DrugInfo {
        generic_name: Some(generic_name),
        indications_and_usage: record.indications_and_usage,
        warnings: record.warnings,
        dosage_and_administration: record.dosage_and_administration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_record_maps_to_drug_info() {
        let raw = r#"{
            "results": [{
                "openfda": {"generic_name": ["AMOXICILLIN"]},
                "indications_and_usage": ["Treatment of susceptible infections."],
                "warnings": ["Serious hypersensitivity reactions."],
                "dosage_and_administration": ["250 mg every 8 hours."]
            }]
        }"#;

        let parsed: LabelResponse = serde_json::from_str(raw).unwrap();
        let info = into_drug_info(parsed.results.into_iter().next().unwrap(), "amoxicillin");

        assert_eq!(info.generic_name.as_deref(), Some("AMOXICILLIN"));
        assert_eq!(info.warnings.unwrap().len(), 1);
    }

    #[test]
    fn test_missing_generic_name_backfilled_from_query() {
        let raw = r#"{"results": [{"warnings": ["w"]}]}"#;
        let parsed: LabelResponse = serde_json::from_str(raw).unwrap();
        let info = into_drug_info(parsed.results.into_iter().next().unwrap(), "dipirona");

        assert_eq!(info.generic_name.as_deref(), Some("dipirona"));
        assert!(info.indications_and_usage.is_none());
    }

    #[test]
    fn test_empty_results_parse() {
        let parsed: LabelResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(parsed.results.is_empty());
    }
}
