//! Identity records: prescriber, patient, workplace.

use serde::{Deserialize, Serialize};

/// Prescriber identity plus the two address blocks printed on documents.
///
/// The clinic block is the prescriber's primary workplace and appears on
/// every document. The emitter block identifies the issuing institution and
/// is used only in the controlled-substance form header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorInfo {
    pub name: String,
    /// Medical council registration (e.g. "CRM/SP 123456")
    pub crm: String,

    // Primary workplace block
    pub clinic_name: String,
    pub clinic_address: String,
    pub clinic_phone: String,
    pub clinic_city_state_zip: String,

    // Emitting-institution block (controlled-substance header only)
    pub emitter_name_line1: String,
    pub emitter_name_line2: String,
    pub emitter_address: String,
    pub emitter_city_state: String,
    pub emitter_cnpj: String,
}

/// Patient identification printed on the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientInfo {
    pub name: String,
    pub document: String,
    pub address: String,
}

/// A named health facility the prescriber works at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workplace {
    pub id: String,
    pub name: String,
}

impl Workplace {
    /// Create a workplace with a time-based id and random suffix.
    pub fn new(name: &str) -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self {
            id: format!(
                "wp-{}-{}",
                chrono::Utc::now().timestamp_millis(),
                &suffix[..8]
            ),
            name: name.to_string(),
        }
    }
}

/// A logged-in prescriber.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub doctor_info: DoctorInfo,
}
