//! Repository Implementations
//!
//! Concrete implementations of domain repository ports. Each entity is
//! stored as a JSON array in its own file under the data directory.

mod appointment;
mod dentist;
mod patient;
mod store;

pub use appointment::JsonAppointmentRepository;
pub use dentist::JsonDentistRepository;
pub use patient::JsonPatientRepository;
pub(crate) use store::JsonStore;
