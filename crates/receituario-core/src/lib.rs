//! Receituário Core Library
//!
//! Local-first engine for AI-assisted prescription authoring.
//!
//! # Architecture
//!
//! ```text
//! Diagnosis → AI template request → Normalization → Editable item list
//!                                                          │
//!                                              Prescriber edits/selects
//!                                                          │
//!                                  ┌───────────────────────┼──────────────────┐
//!                                  │                       │                  │
//!                                  ▼                       ▼                  ▼
//!                            Route grouping          Local save        Interaction
//!                                  │               (SQLite blobs)         check
//!                                  ▼
//!                       Document generation
//!                 (simple text / controlled two-copy form)
//! ```
//!
//! # Core Principle
//!
//! **AI output is never trusted as-is.** Every model response passes
//! through [`normalize`] before it reaches the prescriber, and the
//! controlled-substance form is rendered locally without any AI call.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Medication, PrescriptionItem, Workplace, etc.)
//! - [`normalize`]: AI-response normalization with bilingual field aliases
//! - [`catalog`]: Built-in medication, specialty and calculator catalogs
//! - [`store`]: SQLite persistence for prescriptions and workplaces
//! - [`assembly`]: Route grouping and document-data assembly
//! - [`render`]: Controlled-substance two-copy form rendering
//! - [`session`]: Active prescriber identity
//! - [`debounce`]: Debounced regeneration and stale-result detection

pub mod assembly;
pub mod catalog;
pub mod debounce;
pub mod models;
pub mod normalize;
pub mod render;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use assembly::{build_generation_data, group_by_route, DEFAULT_ROUTE};
pub use catalog::{search_medications, MedicationEntry, MEDICATIONS};
pub use models::{
    DoctorInfo, DoseAdjustments, Interaction, Medication, PatientInfo, PrescriptionContext,
    PrescriptionGenerationData, PrescriptionItem, PrescriptionTemplate, PrescriptionToSave,
    PrescriptionType, RiskLevel, RouteGroup, SavedPrescription, User, Workplace,
};
pub use normalize::{normalize_prescription, NormalizeError};
pub use render::{render_copy, render_document, Via};
pub use session::Session;
pub use store::{Database, DbError};

/// Unified error for callers that mix storage and normalization paths.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(#[from] store::DbError),

    #[error("Normalization error: {0}")]
    Normalize(#[from] normalize::NormalizeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
