//! Workplace collection operations.

use super::{put_blob, Database, DbError, DbResult, PRESCRIPTIONS_KEY, WORKPLACES_KEY};
use crate::models::{SavedPrescription, Workplace};

impl Database {
    /// All registered workplaces. Never fails.
    pub fn workplaces(&self) -> Vec<Workplace> {
        self.read_blob(WORKPLACES_KEY)
    }

    /// Register a new workplace.
    ///
    /// Name uniqueness is checked case-insensitively; a duplicate fails
    /// without mutating the collection.
    pub fn add_workplace(&self, name: &str) -> DbResult<Workplace> {
        let mut workplaces = self.workplaces();
        if workplaces
            .iter()
            .any(|w| w.name.to_lowercase() == name.to_lowercase())
        {
            return Err(DbError::DuplicateWorkplace(name.to_string()));
        }

        let workplace = Workplace::new(name);
        workplaces.push(workplace.clone());
        self.write_blob(WORKPLACES_KEY, &workplaces)?;
        Ok(workplace)
    }

    /// Delete a workplace and strip its reference from every prescription
    /// that pointed to it. The referencing prescriptions are kept, just
    /// recategorized as unassigned. Both writes commit in one transaction.
    pub fn delete_workplace(&mut self, id: &str) -> DbResult<()> {
        let workplaces: Vec<Workplace> = self.read_blob(WORKPLACES_KEY);
        let mut prescriptions: Vec<SavedPrescription> = self.read_blob(PRESCRIPTIONS_KEY);

        let remaining: Vec<Workplace> = workplaces.into_iter().filter(|w| w.id != id).collect();
        for prescription in prescriptions.iter_mut() {
            if prescription.data.workplace_id.as_deref() == Some(id) {
                prescription.data.workplace_id = None;
                prescription.data.workplace_name = None;
            }
        }

        let workplaces_blob = serde_json::to_string(&remaining)?;
        let prescriptions_blob = serde_json::to_string(&prescriptions)?;

        let tx = self.conn_mut().transaction()?;
        put_blob(&tx, WORKPLACES_KEY, &workplaces_blob)?;
        put_blob(&tx, PRESCRIPTIONS_KEY, &prescriptions_blob)?;
        tx.commit()?;
        Ok(())
    }
}
