//! Saved-prescription collection operations.

use chrono::DateTime;

use super::{Database, DbResult, PRESCRIPTIONS_KEY};
use crate::models::{PrescriptionToSave, SavedPrescription};

impl Database {
    /// All saved prescriptions, most recent first.
    ///
    /// Never fails: a missing or corrupt blob yields an empty list.
    pub fn saved_prescriptions(&self) -> Vec<SavedPrescription> {
        let mut records: Vec<SavedPrescription> = self.read_blob(PRESCRIPTIONS_KEY);
        records.sort_by_key(|p| std::cmp::Reverse(saved_at_epoch(&p.saved_at)));
        records
    }

    /// Save or update a prescription snapshot.
    ///
    /// With a known `id` the existing record is overwritten in place and
    /// its timestamp refreshed. An unknown `id` inserts a new record under
    /// that id rather than dropping the data. Without an `id` a fresh one
    /// is generated.
    pub fn save_prescription(
        &self,
        data: PrescriptionToSave,
        id: Option<&str>,
    ) -> DbResult<SavedPrescription> {
        let mut records: Vec<SavedPrescription> = self.read_blob(PRESCRIPTIONS_KEY);

        let record = match id {
            Some(id) => {
                let record = SavedPrescription::with_id(data, id);
                match records.iter_mut().find(|p| p.id == id) {
                    Some(existing) => *existing = record.clone(),
                    None => records.push(record.clone()),
                }
                record
            }
            None => {
                let record = SavedPrescription::new(data);
                records.push(record.clone());
                record
            }
        };

        self.write_blob(PRESCRIPTIONS_KEY, &records)?;
        Ok(record)
    }

    /// Remove a prescription. Absence of a match is a no-op.
    pub fn delete_prescription(&self, id: &str) -> DbResult<()> {
        let mut records: Vec<SavedPrescription> = self.read_blob(PRESCRIPTIONS_KEY);
        records.retain(|p| p.id != id);
        self.write_blob(PRESCRIPTIONS_KEY, &records)
    }
}

/// Millisecond epoch for sorting; unparseable timestamps sort oldest.
fn saved_at_epoch(saved_at: &str) -> i64 {
    DateTime::parse_from_rfc3339(saved_at)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(i64::MIN)
}
