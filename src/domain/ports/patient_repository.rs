//! PatientRepository port
//!
//! Persists patients as a JSON array in a single file.

use crate::domain::entities::Patient;
use crate::domain::ports::StorageResult;

pub trait PatientRepository {
    /// Append a patient record
    fn add(&self, patient: &Patient) -> StorageResult<()>;

    /// Look up one patient by id
    fn get_by_id(&self, id: &str) -> StorageResult<Option<Patient>>;

    /// All patients, in stored order
    fn list(&self) -> StorageResult<Vec<Patient>>;

    /// Upsert: replace the record with the same id, or append if absent
    fn update(&self, patient: &Patient) -> StorageResult<()>;

    /// Remove the record with this id; no-op if absent
    fn delete(&self, id: &str) -> StorageResult<()>;
}
