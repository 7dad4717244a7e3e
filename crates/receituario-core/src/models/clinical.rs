//! Typed shapes returned by the clinical-score and drug-label lookups.

use serde::{Deserialize, Serialize};

/// Result of a clinical-score calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicalCalculationResult {
    /// Final value or classification (e.g. "5 pontos", "Risco Baixo")
    pub score: String,
    /// Clinical interpretation and recommendations
    pub interpretation: String,
    /// Formula or criteria used, for transparency
    pub formula: String,
}

/// Drug-label sections in the openFDA layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DrugInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indications_and_usage: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage_and_administration: Option<Vec<String>>,
}

/// A web source backing a grounded-search summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}
