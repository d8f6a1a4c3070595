//! Appointment commands

use anyhow::Result;

use dental::presentation::output::ClinicRenderer;
use dental::ConcreteClinicService;

#[allow(clippy::too_many_arguments)]
pub fn cmd_schedule(
    service: &ConcreteClinicService,
    patient: &str,
    dentist: &str,
    start: &str,
    end: &str,
    notes: Option<&str>,
    renderer: &dyn ClinicRenderer,
) -> Result<()> {
    let start = super::parse_time(start)?;
    let end = super::parse_time(end)?;

    let appointment = service.schedule_appointment(patient, dentist, start, end, notes)?;
    renderer.appointment_scheduled(&appointment);
    Ok(())
}

pub fn cmd_appointments(
    service: &ConcreteClinicService,
    patient: Option<&str>,
    renderer: &dyn ClinicRenderer,
) -> Result<()> {
    let appointments = match patient {
        Some(id) => service.list_appointments_for_patient(id)?,
        None => service.list_appointments()?,
    };

    for appointment in &appointments {
        renderer.appointment_row(appointment);
    }
    Ok(())
}

pub fn cmd_cancel(
    service: &ConcreteClinicService,
    id: &str,
    renderer: &dyn ClinicRenderer,
) -> Result<()> {
    let appointment = service.cancel_appointment(id)?;
    renderer.appointment_cancelled(&appointment);
    Ok(())
}
