//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod status;

pub use status::AppointmentStatus;
