//! Dental - single-clinic scheduling tool
//!
//! Keeps a small clinic's day running from the terminal: a patient
//! roster, a dentist roster, and appointment booking with per-dentist
//! conflict checks, all persisted as JSON array files.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::ClinicService;
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Appointment, Dentist, Patient};
pub use domain::value_objects::AppointmentStatus;
pub use error::{ClinicError, ClinicResult};
pub use presentation::{create_clinic_service, ConcreteClinicService};
