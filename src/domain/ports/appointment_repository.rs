//! AppointmentRepository port
//!
//! Persists appointments as a JSON array in a single file, plus the
//! calendar queries the scheduling rules are built on.

use crate::domain::entities::Appointment;
use crate::domain::ports::StorageResult;
use chrono::NaiveDateTime;

pub trait AppointmentRepository {
    /// Append an appointment record
    fn add(&self, appointment: &Appointment) -> StorageResult<()>;

    /// Look up one appointment by id
    fn get_by_id(&self, id: &str) -> StorageResult<Option<Appointment>>;

    /// All appointments, in stored order
    fn list_all(&self) -> StorageResult<Vec<Appointment>>;

    /// Upsert: replace the record with the same id, or append if absent
    fn update(&self, appointment: &Appointment) -> StorageResult<()>;

    /// Remove the record with this id; no-op if absent
    fn delete(&self, id: &str) -> StorageResult<()>;

    /// Appointments for a dentist whose slot intersects `[start, end)`
    ///
    /// Returns every status; callers filter out cancelled records when
    /// they only care about live bookings.
    fn list_by_dentist_between(
        &self,
        dentist_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> StorageResult<Vec<Appointment>>;

    /// All appointments booked for a patient, in stored order
    fn list_by_patient(&self, patient_id: &str) -> StorageResult<Vec<Appointment>>;
}
