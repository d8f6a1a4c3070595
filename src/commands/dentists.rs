//! Dentist roster commands

use anyhow::Result;

use dental::presentation::output::ClinicRenderer;
use dental::ConcreteClinicService;

pub fn cmd_add_dentist(
    service: &ConcreteClinicService,
    name: &str,
    specialty: &str,
    renderer: &dyn ClinicRenderer,
) -> Result<()> {
    let dentist = service.add_dentist(name, specialty)?;
    renderer.dentist_added(&dentist);
    Ok(())
}

pub fn cmd_dentists(service: &ConcreteClinicService, renderer: &dyn ClinicRenderer) -> Result<()> {
    for dentist in service.list_dentists()? {
        renderer.dentist_row(&dentist);
    }
    Ok(())
}
