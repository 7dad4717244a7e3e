//! Normalization of raw AI responses into strict prescription templates.
//!
//! The generative service answers with loosely-structured JSON, sometimes
//! wrapped in a markdown code fence and with field names in either English
//! or Portuguese. This module converts that blob into a validated
//! [`PrescriptionTemplate`], tolerating missing fields but failing loudly
//! when the structure is unusable.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{DoseAdjustments, Medication, PrescriptionTemplate};

/// Normalization errors.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("AI response is empty")]
    EmptyResponse,

    #[error("AI response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("AI response does not contain a valid medication list")]
    MissingMedicationList,
}

pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Accepted keys for the medication list, first match wins.
const MEDICATION_LIST_KEYS: &[&str] = &["medications", "prescricao_modelo", "medicamentos"];

/// Ordered alias list plus literal default for one semantic field.
struct FieldSpec {
    aliases: &'static [&'static str],
    default: &'static str,
}

impl FieldSpec {
    /// First present alias wins; absent everywhere means the default.
    fn extract(&self, obj: &Map<String, Value>) -> String {
        pick_string(obj, self.aliases).unwrap_or_else(|| self.default.to_string())
    }
}

const NAME: FieldSpec = FieldSpec {
    aliases: &["name", "nome"],
    default: "Medicamento sem nome",
};
const PRESENTATION: FieldSpec = FieldSpec {
    aliases: &["presentation", "apresentacao"],
    default: "N/A",
};
const DOSAGE: FieldSpec = FieldSpec {
    aliases: &["dosage", "posologia_padrao"],
    default: "N/A",
};
const ROUTE: FieldSpec = FieldSpec {
    aliases: &["route", "via_administracao"],
    default: "N/A",
};
const FREQUENCY: FieldSpec = FieldSpec {
    aliases: &["frequency", "frequencia"],
    default: "N/A",
};
const OBSERVATIONS: FieldSpec = FieldSpec {
    aliases: &["observations", "observacoes_prescritor"],
    default: "N/A",
};
const ADJUSTMENTS_KEYS: &[&str] = &["adjustments", "ajustes_dose"];
const RENAL: FieldSpec = FieldSpec {
    aliases: &["renal", "insuficiencia_renal"],
    default: "N/A",
};
const HEPATIC: FieldSpec = FieldSpec {
    aliases: &["hepatic", "insuficiencia_hepatica"],
    default: "N/A",
};
const DIAGNOSIS_KEYS: &[&str] = &["diagnosis", "diagnostico"];
const PROTOCOL_SOURCE_KEYS: &[&str] = &[
    "protocolSource",
    "fonte_diretriz",
    "fonte_diretrizes_principais",
];

/// Normalize a raw AI response into a validated template.
///
/// `diagnosis_fallback` fills the diagnosis when the response omits it;
/// the model frequently skips fields that merely echo the request.
pub fn normalize_prescription(
    raw_text: &str,
    diagnosis_fallback: &str,
) -> NormalizeResult<PrescriptionTemplate> {
    if raw_text.trim().is_empty() {
        return Err(NormalizeError::EmptyResponse);
    }

    let cleaned = strip_code_fence(raw_text);
    let parsed: Value = serde_json::from_str(cleaned).map_err(|e| {
        tracing::warn!(error = %e, "template response is not valid JSON");
        NormalizeError::InvalidJson(e.to_string())
    })?;

    let obj = parsed
        .as_object()
        .ok_or(NormalizeError::MissingMedicationList)?;

    let medications_list = MEDICATION_LIST_KEYS
        .iter()
        .find_map(|key| obj.get(*key))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            tracing::warn!("template response has no medication list under any known key");
            NormalizeError::MissingMedicationList
        })?;

    let medications = medications_list.iter().map(normalize_medication).collect();

    Ok(PrescriptionTemplate {
        diagnosis: pick_string(obj, DIAGNOSIS_KEYS)
            .unwrap_or_else(|| diagnosis_fallback.to_string()),
        protocol_source: pick_string(obj, PROTOCOL_SOURCE_KEYS)
            .unwrap_or_else(|| "Não especificada".to_string()),
        medications,
    })
}

/// Strip an optional markdown code fence (with optional language tag).
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag line, if any.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// First present alias that holds a string, rendered to text.
fn pick_string(obj: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|key| {
        obj.get(*key).and_then(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    })
}

/// Map one raw medication entry field-by-field with alias fallback.
fn normalize_medication(raw: &Value) -> Medication {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);

    let adjustments = ADJUSTMENTS_KEYS
        .iter()
        .find_map(|key| obj.get(*key))
        .and_then(Value::as_object)
        .map(|adj| DoseAdjustments {
            renal: RENAL.extract(adj),
            hepatic: HEPATIC.extract(adj),
        })
        .unwrap_or_else(DoseAdjustments::unspecified);

    Medication {
        id: pick_string(obj, &["id"]).unwrap_or_else(generated_id),
        name: NAME.extract(obj),
        presentation: PRESENTATION.extract(obj),
        dosage: DOSAGE.extract(obj),
        route: ROUTE.extract(obj),
        frequency: FREQUENCY.extract(obj),
        observations: OBSERVATIONS.extract(obj),
        adjustments,
    }
}

/// Placeholder id guaranteed not to collide meaningfully.
fn generated_id() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("med-{}", &suffix[..7])
}
