//! Drug-drug interaction models.

use serde::{Deserialize, Serialize};

/// Ordered interaction severity, A (minor) through D (contraindicated).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    A,
    B,
    C,
    D,
}

impl RiskLevel {
    /// Levels B and up are surfaced to the prescriber; A is informational.
    pub fn is_clinically_relevant(&self) -> bool {
        *self > RiskLevel::A
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
        }
    }
}

/// A single drug-drug interaction reported by the gateway.
///
/// Ephemeral: recomputed whenever the selected-medication set changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Names of the drugs involved
    pub drugs: Vec<String>,
    /// Mechanism description
    pub description: String,
    /// Practical clinical recommendation
    pub recommendation: String,
    /// Severity classification
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
}

/// Gateway response wrapper for an interaction check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InteractionCheckResult {
    pub interactions: Vec<Interaction>,
}

impl InteractionCheckResult {
    /// Keep only interactions worth showing (risk level above A).
    pub fn clinically_relevant(self) -> Vec<Interaction> {
        self.interactions
            .into_iter()
            .filter(|i| i.risk_level.is_clinically_relevant())
            .collect()
    }
}
