//! Appointment entity - a booked time slot linking a patient and a dentist
//!
//! Appointments keep naive local timestamps (the clinic runs in one
//! timezone) and treat their range as half-open: `[start_time, end_time)`.

use crate::domain::value_objects::AppointmentStatus;
use chrono::NaiveDateTime;

/// A booked appointment
///
/// Immutable record; status changes produce a new value with the same id
/// (update-by-replacement).
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    /// Unique identifier (UUID string)
    id: String,
    /// Id of the booked patient
    patient_id: String,
    /// Id of the booked dentist
    dentist_id: String,
    /// Slot start (inclusive)
    start_time: NaiveDateTime,
    /// Slot end (exclusive)
    end_time: NaiveDateTime,
    /// Lifecycle status
    status: AppointmentStatus,
    /// Optional free-text notes
    notes: Option<String>,
}

impl Appointment {
    /// Create a new scheduled Appointment with no notes
    pub fn new(
        id: impl Into<String>,
        patient_id: impl Into<String>,
        dentist_id: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            patient_id: patient_id.into(),
            dentist_id: dentist_id.into(),
            start_time,
            end_time,
            status: AppointmentStatus::default(),
            notes: None,
        }
    }

    /// Builder: set the status
    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// True if this appointment's slot intersects `[start, end)`
    ///
    /// Ranges are half-open, so back-to-back slots (one ending exactly
    /// when the other starts) do not overlap.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start_time < end && start < self.end_time
    }

    /// True if this appointment still holds its slot
    pub fn is_scheduled(&self) -> bool {
        self.status.is_scheduled()
    }

    /// True if this appointment has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.status.is_cancelled()
    }

    // --- Getters ---

    /// Get the appointment id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the booked patient's id
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    /// Get the booked dentist's id
    pub fn dentist_id(&self) -> &str {
        &self.dentist_id
    }

    /// Get the slot start (inclusive)
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Get the slot end (exclusive)
    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    /// Get the status
    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    /// Get the notes, if any
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
