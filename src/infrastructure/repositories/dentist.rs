//! JSON Dentist Repository
//!
//! Persists dentists in a single JSON array file (`dentists.json`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::Dentist;
use crate::domain::ports::{DentistRepository, StorageResult};
use crate::infrastructure::repositories::JsonStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonDentist {
    id: String,
    name: String,
    specialty: String,
}

impl From<&Dentist> for JsonDentist {
    fn from(dentist: &Dentist) -> Self {
        Self {
            id: dentist.id().to_string(),
            name: dentist.name().to_string(),
            specialty: dentist.specialty().to_string(),
        }
    }
}

impl From<JsonDentist> for Dentist {
    fn from(record: JsonDentist) -> Self {
        Dentist::new(record.id, record.name, record.specialty)
    }
}

pub struct JsonDentistRepository {
    store: JsonStore,
}

impl JsonDentistRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl DentistRepository for JsonDentistRepository {
    fn add(&self, dentist: &Dentist) -> StorageResult<()> {
        let mut records: Vec<JsonDentist> = self.store.load()?;
        records.push(dentist.into());
        self.store.save(&records)
    }

    fn get_by_id(&self, id: &str) -> StorageResult<Option<Dentist>> {
        let records: Vec<JsonDentist> = self.store.load()?;
        Ok(records.into_iter().find(|r| r.id == id).map(Dentist::from))
    }

    fn list(&self) -> StorageResult<Vec<Dentist>> {
        let records: Vec<JsonDentist> = self.store.load()?;
        Ok(records.into_iter().map(Dentist::from).collect())
    }

    fn update(&self, dentist: &Dentist) -> StorageResult<()> {
        let mut records: Vec<JsonDentist> = self.store.load()?;
        records.retain(|r| r.id != dentist.id());
        records.push(dentist.into());
        self.store.save(&records)
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let mut records: Vec<JsonDentist> = self.store.load()?;
        records.retain(|r| r.id != id);
        self.store.save(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn add_list_roundtrip() {
        let dir = tempdir().unwrap();
        let repo = JsonDentistRepository::new(dir.path().join("dentists.json"));

        repo.add(&Dentist::new("d-1", "Dr. Bob", "orthodontics"))
            .unwrap();
        repo.add(&Dentist::new("d-2", "Dr. Eve", "endodontics"))
            .unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name(), "Dr. Bob");
        assert_eq!(listed[1].specialty(), "endodontics");
    }

    #[test]
    fn update_is_upsert() {
        let dir = tempdir().unwrap();
        let repo = JsonDentistRepository::new(dir.path().join("dentists.json"));

        repo.add(&Dentist::new("d-1", "Dr. Bob", "orthodontics"))
            .unwrap();
        repo.update(&Dentist::new("d-1", "Dr. Bob", "general"))
            .unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].specialty(), "general");
    }

    #[test]
    fn delete_then_get_returns_none() {
        let dir = tempdir().unwrap();
        let repo = JsonDentistRepository::new(dir.path().join("dentists.json"));

        repo.add(&Dentist::new("d-1", "Dr. Bob", "orthodontics"))
            .unwrap();
        repo.delete("d-1").unwrap();

        assert!(repo.get_by_id("d-1").unwrap().is_none());
    }
}
