//! Medication, template and prescription-item models.

use serde::{Deserialize, Serialize};

/// Dose adjustments for organ impairment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoseAdjustments {
    /// Recommendation for renal impairment
    pub renal: String,
    /// Recommendation for hepatic impairment
    pub hepatic: String,
}

impl DoseAdjustments {
    /// Adjustments with both fields set to the "N/A" placeholder.
    pub fn unspecified() -> Self {
        Self {
            renal: "N/A".into(),
            hepatic: "N/A".into(),
        }
    }
}

/// A single medication inside a prescription template.
///
/// Immutable once produced by normalization; user edits happen on the
/// derived [`PrescriptionItem`], never here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    /// Unique identifier, usually the active ingredient in kebab-case
    pub id: String,
    /// Active-ingredient name
    pub name: String,
    /// Common presentation (e.g. "50mg comp.", "10mg/mL sol oral")
    pub presentation: String,
    /// Standard recommended dose
    pub dosage: String,
    /// Route of administration (e.g. "Via Oral")
    pub route: String,
    /// Administration frequency (e.g. "a cada 12 horas")
    pub frequency: String,
    /// Free-text notes for the prescriber
    pub observations: String,
    /// Renal/hepatic dose adjustments
    pub adjustments: DoseAdjustments,
}

/// An AI-suggested draft medication list for a diagnosis, pre-edit.
///
/// Produced once per diagnosis query by the normalizer. A template always
/// has a diagnosis and a (possibly empty) medication list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionTemplate {
    /// Diagnosis label
    pub diagnosis: String,
    /// Guideline-source label (e.g. "UpToDate")
    pub protocol_source: String,
    /// Ordered medication list
    pub medications: Vec<Medication>,
}

impl PrescriptionTemplate {
    /// Blank template for a prescription built from scratch.
    pub fn blank(diagnosis: &str) -> Self {
        Self {
            diagnosis: diagnosis.to_string(),
            protocol_source: "N/A".into(),
            medications: Vec::new(),
        }
    }
}

/// A user-facing, editable prescription line.
///
/// Derived from a template medication on load, or appended blank by the
/// user. Template items are toggled via `selected` and never physically
/// removed; custom items (`is_custom`) are freely editable and deletable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionItem {
    /// The underlying medication data
    #[serde(flatten)]
    pub medication: Medication,
    /// Whether this line participates in the generated document
    pub selected: bool,
    /// User-editable posology text
    pub custom_posology: String,
    /// User-editable quantity text
    pub quantity: String,
    /// True for user-added blank entries, false for AI-suggested ones
    #[serde(default)]
    pub is_custom: bool,
}

impl PrescriptionItem {
    /// Derive an item from a template medication.
    ///
    /// The default posology joins dosage, route and frequency, skipping
    /// blank parts. Quantity defaults to one box.
    pub fn from_medication(med: &Medication) -> Self {
        let default_posology: String = [&med.dosage, &med.route, &med.frequency]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            medication: med.clone(),
            selected: true,
            custom_posology: default_posology,
            quantity: "1 (uma) caixa".into(),
            is_custom: false,
        }
    }

    /// A blank user-added item with a fresh id.
    pub fn custom() -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self {
            medication: Medication {
                id: format!("custom-{}", &suffix[..8]),
                name: String::new(),
                presentation: String::new(),
                dosage: String::new(),
                route: String::new(),
                frequency: String::new(),
                observations: String::new(),
                adjustments: DoseAdjustments::unspecified(),
            },
            selected: true,
            custom_posology: String::new(),
            quantity: "1".into(),
            is_custom: true,
        }
    }
}

/// Derive the initial editable item list from a template.
pub fn items_from_template(template: &PrescriptionTemplate) -> Vec<PrescriptionItem> {
    template
        .medications
        .iter()
        .map(PrescriptionItem::from_medication)
        .collect()
}
