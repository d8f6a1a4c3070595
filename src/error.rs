//! Error types for the clinic.
//!
//! Uses `thiserror` for library errors; binaries wrap these in `anyhow`.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::domain::ports::StorageError;

/// Result type alias for clinic operations
pub type ClinicResult<T> = Result<T, ClinicError>;

/// Main error type for clinic operations
#[derive(Error, Debug)]
pub enum ClinicError {
    /// Appointment start is not strictly before its end
    #[error("invalid time range: {start} is not before {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Referenced patient does not exist
    #[error("patient not found: {id}")]
    PatientNotFound { id: String },

    /// Referenced dentist does not exist
    #[error("dentist not found: {id}")]
    DentistNotFound { id: String },

    /// Referenced appointment does not exist
    #[error("appointment not found: {id}")]
    AppointmentNotFound { id: String },

    /// Requested slot overlaps a scheduled appointment for the dentist
    #[error("appointment conflicts with {count} existing booking(s) for dentist {dentist_id}")]
    Conflict { dentist_id: String, count: usize },

    /// Configuration file failed to parse
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Repository failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_error_display_invalid_range() {
        let err = ClinicError::InvalidRange {
            start: at(10, 0),
            end: at(9, 0),
        };
        assert_eq!(
            err.to_string(),
            "invalid time range: 2026-01-01 10:00:00 is not before 2026-01-01 09:00:00"
        );
    }

    #[test]
    fn test_error_display_patient_not_found() {
        let err = ClinicError::PatientNotFound {
            id: "p-404".to_string(),
        };
        assert_eq!(err.to_string(), "patient not found: p-404");
    }

    #[test]
    fn test_error_display_conflict() {
        let err = ClinicError::Conflict {
            dentist_id: "d-1".to_string(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "appointment conflicts with 2 existing booking(s) for dentist d-1"
        );
    }
}
