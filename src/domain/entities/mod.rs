//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Patient` - A person receiving care
//! - `Dentist` - A provider with a bookable calendar
//! - `Appointment` - A booked slot linking the two

mod appointment;
mod dentist;
mod patient;

pub use appointment::Appointment;
pub use dentist::Dentist;
pub use patient::Patient;
