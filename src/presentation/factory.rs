//! Service Factory
//!
//! Creates the clinic service with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::ClinicService;
use crate::infrastructure::{
    JsonAppointmentRepository, JsonDentistRepository, JsonPatientRepository,
};

/// Type alias for the concrete ClinicService with all dependencies
pub type ConcreteClinicService =
    ClinicService<JsonPatientRepository, JsonDentistRepository, JsonAppointmentRepository>;

/// Create a clinic service storing its data under `data_dir`
///
/// Wires one JSON file repository per entity: `patients.json`,
/// `dentists.json`, `appointments.json`.
pub fn create_clinic_service(data_dir: &Path) -> ConcreteClinicService {
    let patients = JsonPatientRepository::new(data_dir.join("patients.json"));
    let dentists = JsonDentistRepository::new(data_dir.join("dentists.json"));
    let appointments = JsonAppointmentRepository::new(data_dir.join("appointments.json"));

    ClinicService::new(patients, dentists, appointments)
}
