//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - JSON-file repository implementations

pub mod repositories;

// Re-export for convenience
pub use repositories::{JsonAppointmentRepository, JsonDentistRepository, JsonPatientRepository};
