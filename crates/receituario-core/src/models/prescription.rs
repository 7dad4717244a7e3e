//! Saved-prescription records and document-generation data.

use serde::{Deserialize, Serialize};

use super::{DoctorInfo, PatientInfo, PrescriptionItem};

/// Document variant: plain receipt or the two-copy controlled form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PrescriptionType {
    #[serde(rename = "Receita Simples")]
    Simples,
    #[serde(rename = "Receita de Controle Especial")]
    ControleEspecial,
}

impl PrescriptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simples => "Receita Simples",
            Self::ControleEspecial => "Receita de Controle Especial",
        }
    }
}

/// Where the prescription will be used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PrescriptionContext {
    Ambulatorial,
    Hospitalar,
}

impl PrescriptionContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ambulatorial => "Ambulatorial",
            Self::Hospitalar => "Hospitalar",
        }
    }
}

/// One formatted medication line inside a route group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteEntry {
    pub name: String,
    pub presentation: String,
    pub posology: String,
    pub quantity: String,
}

/// Medications sharing an administration route, in insertion order.
///
/// Groups themselves are ordered by first appearance of the route, so a
/// `Vec<RouteGroup>` keeps the document layout deterministic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteGroup {
    /// Route label ("Oral", "Intravenosa", ...); "Interno" when absent
    pub route: String,
    pub entries: Vec<RouteEntry>,
}

/// Everything the document renderers need, built fresh on every generate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionGenerationData {
    pub prescription_type: PrescriptionType,
    pub context: PrescriptionContext,
    /// Issue date as printed (dd/mm/yyyy)
    pub issue_date: String,
    pub doctor: DoctorInfo,
    pub patient: PatientInfo,
    pub medications_by_route: Vec<RouteGroup>,
}

/// Snapshot of an in-progress prescription, pre-persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionToSave {
    pub custom_name: String,
    pub diagnosis: String,
    pub protocol_source: String,
    pub items: Vec<PrescriptionItem>,
    pub doctor_info: DoctorInfo,
    pub patient_info: PatientInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workplace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workplace_name: Option<String>,
}

/// A persisted prescription snapshot with identity and save timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedPrescription {
    pub id: String,
    /// RFC 3339 save timestamp; refreshed on every overwrite
    pub saved_at: String,
    #[serde(flatten)]
    pub data: PrescriptionToSave,
}

impl SavedPrescription {
    /// Wrap a snapshot under a freshly generated id.
    pub fn new(data: PrescriptionToSave) -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self {
            id: format!(
                "presc-{}-{}",
                chrono::Utc::now().timestamp_millis(),
                &suffix[..8]
            ),
            saved_at: chrono::Utc::now().to_rfc3339(),
            data,
        }
    }

    /// Wrap a snapshot under a caller-supplied id with a fresh timestamp.
    pub fn with_id(data: PrescriptionToSave, id: &str) -> Self {
        Self {
            id: id.to_string(),
            saved_at: chrono::Utc::now().to_rfc3339(),
            data,
        }
    }
}
