//! DentistRepository port
//!
//! Persists dentists as a JSON array in a single file.

use crate::domain::entities::Dentist;
use crate::domain::ports::StorageResult;

pub trait DentistRepository {
    /// Append a dentist record
    fn add(&self, dentist: &Dentist) -> StorageResult<()>;

    /// Look up one dentist by id
    fn get_by_id(&self, id: &str) -> StorageResult<Option<Dentist>>;

    /// All dentists, in stored order
    fn list(&self) -> StorageResult<Vec<Dentist>>;

    /// Upsert: replace the record with the same id, or append if absent
    fn update(&self, dentist: &Dentist) -> StorageResult<()>;

    /// Remove the record with this id; no-op if absent
    fn delete(&self, id: &str) -> StorageResult<()>;
}
