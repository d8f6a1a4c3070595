//! JSON Patient Repository
//!
//! Persists patients in a single JSON array file (`patients.json`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::Patient;
use crate::domain::ports::{PatientRepository, StorageResult};
use crate::infrastructure::repositories::JsonStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonPatient {
    id: String,
    name: String,
    phone: String,
}

impl From<&Patient> for JsonPatient {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id().to_string(),
            name: patient.name().to_string(),
            phone: patient.phone().to_string(),
        }
    }
}

impl From<JsonPatient> for Patient {
    fn from(record: JsonPatient) -> Self {
        Patient::new(record.id, record.name, record.phone)
    }
}

pub struct JsonPatientRepository {
    store: JsonStore,
}

impl JsonPatientRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl PatientRepository for JsonPatientRepository {
    fn add(&self, patient: &Patient) -> StorageResult<()> {
        let mut records: Vec<JsonPatient> = self.store.load()?;
        records.push(patient.into());
        self.store.save(&records)
    }

    fn get_by_id(&self, id: &str) -> StorageResult<Option<Patient>> {
        let records: Vec<JsonPatient> = self.store.load()?;
        Ok(records.into_iter().find(|r| r.id == id).map(Patient::from))
    }

    fn list(&self) -> StorageResult<Vec<Patient>> {
        let records: Vec<JsonPatient> = self.store.load()?;
        Ok(records.into_iter().map(Patient::from).collect())
    }

    fn update(&self, patient: &Patient) -> StorageResult<()> {
        let mut records: Vec<JsonPatient> = self.store.load()?;
        records.retain(|r| r.id != patient.id());
        records.push(patient.into());
        self.store.save(&records)
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let mut records: Vec<JsonPatient> = self.store.load()?;
        records.retain(|r| r.id != id);
        self.store.save(&records)
    }
}
