//! Patient commands

use anyhow::Result;

use dental::presentation::output::ClinicRenderer;
use dental::ConcreteClinicService;

pub fn cmd_register_patient(
    service: &ConcreteClinicService,
    name: &str,
    phone: &str,
    renderer: &dyn ClinicRenderer,
) -> Result<()> {
    let patient = service.register_patient(name, phone)?;
    renderer.patient_registered(&patient);
    Ok(())
}

pub fn cmd_patients(service: &ConcreteClinicService, renderer: &dyn ClinicRenderer) -> Result<()> {
    for patient in service.list_patients()? {
        renderer.patient_row(&patient);
    }
    Ok(())
}
