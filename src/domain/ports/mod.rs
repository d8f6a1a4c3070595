//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod appointment_repository;
pub mod dentist_repository;
pub mod patient_repository;
pub mod storage;

pub use appointment_repository::AppointmentRepository;
pub use dentist_repository::DentistRepository;
pub use patient_repository::PatientRepository;
pub use storage::{StorageError, StorageResult};
