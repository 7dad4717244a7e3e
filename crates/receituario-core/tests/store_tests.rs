//! On-disk persistence tests.
//!
//! The in-crate unit tests cover each operation in memory; these verify
//! that state survives closing and reopening a database file.

use tempfile::TempDir;

use receituario_core::models::{DoctorInfo, PatientInfo, PrescriptionToSave};
use receituario_core::store::{Database, DbError};

fn snapshot(name: &str, workplace: Option<(&str, &str)>) -> PrescriptionToSave {
    PrescriptionToSave {
        custom_name: name.into(),
        diagnosis: "Hipertensão Arterial Sistêmica".into(),
        protocol_source: "Diretriz SBC 2023".into(),
        items: vec![],
        doctor_info: DoctorInfo::default(),
        patient_info: PatientInfo::default(),
        workplace_id: workplace.map(|(id, _)| id.to_string()),
        workplace_name: workplace.map(|(_, n)| n.to_string()),
    }
}

#[test]
fn test_prescriptions_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("receituario.db");

    let saved = {
        let db = Database::open(&path).unwrap();
        db.save_prescription(snapshot("persistida", None), None)
            .unwrap()
    };

    let db = Database::open(&path).unwrap();
    let records = db.saved_prescriptions();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, saved.id);
    assert_eq!(records[0].data.custom_name, "persistida");
}

#[test]
fn test_workplaces_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("receituario.db");

    {
        let db = Database::open(&path).unwrap();
        db.add_workplace("UBS Central").unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.workplaces().len(), 1);
    assert_eq!(db.workplaces()[0].name, "UBS Central");
}

#[test]
fn test_duplicate_workplace_rejected_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("receituario.db");

    {
        let db = Database::open(&path).unwrap();
        db.add_workplace("Hospital Municipal").unwrap();
    }

    let db = Database::open(&path).unwrap();
    let result = db.add_workplace("HOSPITAL MUNICIPAL");
    assert!(matches!(result, Err(DbError::DuplicateWorkplace(_))));
}

#[test]
fn test_update_in_place_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("receituario.db");

    let first = {
        let db = Database::open(&path).unwrap();
        db.save_prescription(snapshot("rascunho", None), None).unwrap()
    };

    {
        let db = Database::open(&path).unwrap();
        db.save_prescription(snapshot("definitiva", None), Some(&first.id))
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let records = db.saved_prescriptions();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].data.custom_name, "definitiva");
}

#[test]
fn test_workplace_cascade_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("receituario.db");

    let workplace = {
        let mut db = Database::open(&path).unwrap();
        let workplace = db.add_workplace("Fecha").unwrap();
        db.save_prescription(
            snapshot("ligada", Some((&workplace.id, &workplace.name))),
            None,
        )
        .unwrap();
        db.delete_workplace(&workplace.id).unwrap();
        workplace
    };

    let db = Database::open(&path).unwrap();
    assert!(db.workplaces().is_empty());

    let records = db.saved_prescriptions();
    assert_eq!(records.len(), 1);
    assert!(records[0].data.workplace_id.is_none());
    assert!(!records
        .iter()
        .any(|p| p.data.workplace_name.as_deref() == Some(workplace.name.as_str())));
}
