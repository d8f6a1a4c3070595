//! AppointmentStatus value object - lifecycle state of an appointment
//!
//! - `Scheduled`: the appointment holds its slot
//! - `Cancelled`: the appointment is kept for history but frees its slot

use serde::{Deserialize, Serialize};

/// Status of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked and occupying its time slot
    #[default]
    Scheduled,
    /// Cancelled; retained in storage but never blocks other bookings
    Cancelled,
}

impl AppointmentStatus {
    /// Returns true if this appointment still holds its slot
    pub fn is_scheduled(&self) -> bool {
        matches!(self, AppointmentStatus::Scheduled)
    }

    /// Returns true if this appointment has been cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppointmentStatus::Cancelled)
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}
