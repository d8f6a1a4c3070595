//! Output Rendering
//!
//! Record lines for humans, JSON event objects for scripts. JSON mode
//! prints exactly one object per line; timestamps there stay in the
//! ISO 8601 wire form, while text mode shortens them to minutes.

use chrono::NaiveDateTime;
use serde_json::json;

use crate::domain::entities::{Appointment, Dentist, Patient};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Display format for appointment times
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render a timestamp the way the text UI displays it
pub fn format_time(time: NaiveDateTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// `<id> <name> <phone>`
pub fn patient_line(patient: &Patient) -> String {
    format!("{} {} {}", patient.id(), patient.name(), patient.phone())
}

/// `<id> <name> <specialty>`
pub fn dentist_line(dentist: &Dentist) -> String {
    format!(
        "{} {} {}",
        dentist.id(),
        dentist.name(),
        dentist.specialty()
    )
}

/// `<id> Patient:<pid> Dentist:<did> <start>-<end> Status:<status>`
pub fn appointment_line(appointment: &Appointment) -> String {
    format!(
        "{} Patient:{} Dentist:{} {}-{} Status:{}",
        appointment.id(),
        appointment.patient_id(),
        appointment.dentist_id(),
        format_time(appointment.start_time()),
        format_time(appointment.end_time()),
        appointment.status()
    )
}

fn patient_value(patient: &Patient) -> serde_json::Value {
    json!({
        "id": patient.id(),
        "name": patient.name(),
        "phone": patient.phone(),
    })
}

fn dentist_value(dentist: &Dentist) -> serde_json::Value {
    json!({
        "id": dentist.id(),
        "name": dentist.name(),
        "specialty": dentist.specialty(),
    })
}

fn appointment_value(appointment: &Appointment) -> serde_json::Value {
    json!({
        "id": appointment.id(),
        "patient_id": appointment.patient_id(),
        "dentist_id": appointment.dentist_id(),
        "start_time": appointment.start_time(),
        "end_time": appointment.end_time(),
        "status": appointment.status(),
        "notes": appointment.notes(),
    })
}

fn emit(event: &str, mut value: serde_json::Value) {
    if let Some(object) = value.as_object_mut() {
        object.insert("event".to_string(), json!(event));
    }
    println!("{value}");
}

/// Trait for rendering clinic records and mutation outcomes
pub trait ClinicRenderer {
    /// One patient, as a list row
    fn patient_row(&self, patient: &Patient);
    /// One dentist, as a list row
    fn dentist_row(&self, dentist: &Dentist);
    /// One appointment, as a list row
    fn appointment_row(&self, appointment: &Appointment);

    /// A patient was registered
    fn patient_registered(&self, patient: &Patient);
    /// A dentist was added to the roster
    fn dentist_added(&self, dentist: &Dentist);
    /// An appointment was booked
    fn appointment_scheduled(&self, appointment: &Appointment);
    /// An appointment was cancelled
    fn appointment_cancelled(&self, appointment: &Appointment);
}

/// Text renderer, line formats shared with the interactive menu
pub struct TextRenderer;

impl ClinicRenderer for TextRenderer {
    fn patient_row(&self, patient: &Patient) {
        println!("{}", patient_line(patient));
    }

    fn dentist_row(&self, dentist: &Dentist) {
        println!("{}", dentist_line(dentist));
    }

    fn appointment_row(&self, appointment: &Appointment) {
        println!("{}", appointment_line(appointment));
    }

    fn patient_registered(&self, patient: &Patient) {
        println!("Patient ID: {}", patient.id());
    }

    fn dentist_added(&self, dentist: &Dentist) {
        println!("Dentist ID: {}", dentist.id());
    }

    fn appointment_scheduled(&self, appointment: &Appointment) {
        println!("Appointment ID: {}", appointment.id());
    }

    fn appointment_cancelled(&self, _appointment: &Appointment) {
        println!("Cancelled");
    }
}

/// JSON renderer, one event object per line
pub struct JsonRenderer;

impl ClinicRenderer for JsonRenderer {
    fn patient_row(&self, patient: &Patient) {
        emit("patient", patient_value(patient));
    }

    fn dentist_row(&self, dentist: &Dentist) {
        emit("dentist", dentist_value(dentist));
    }

    fn appointment_row(&self, appointment: &Appointment) {
        emit("appointment", appointment_value(appointment));
    }

    fn patient_registered(&self, patient: &Patient) {
        emit("patient_registered", patient_value(patient));
    }

    fn dentist_added(&self, dentist: &Dentist) {
        emit("dentist_added", dentist_value(dentist));
    }

    fn appointment_scheduled(&self, appointment: &Appointment) {
        emit("appointment_scheduled", appointment_value(appointment));
    }

    fn appointment_cancelled(&self, appointment: &Appointment) {
        emit("appointment_cancelled", appointment_value(appointment));
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat) -> Box<dyn ClinicRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AppointmentStatus;
    use chrono::NaiveDate;
    use insta::assert_snapshot;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn patient_line_format() {
        let patient = Patient::new("p-1", "Alice", "555-0100");
        assert_snapshot!(patient_line(&patient), @"p-1 Alice 555-0100");
    }

    #[test]
    fn dentist_line_format() {
        let dentist = Dentist::new("d-1", "Dr. Bob", "orthodontics");
        assert_snapshot!(dentist_line(&dentist), @"d-1 Dr. Bob orthodontics");
    }

    #[test]
    fn appointment_line_format() {
        let appointment = Appointment::new("a-1", "p-1", "d-1", at(9, 0), at(9, 30));
        assert_snapshot!(
            appointment_line(&appointment),
            @"a-1 Patient:p-1 Dentist:d-1 2026-01-01 09:00-2026-01-01 09:30 Status:scheduled"
        );
    }

    #[test]
    fn appointment_line_shows_cancelled_status() {
        let appointment = Appointment::new("a-1", "p-1", "d-1", at(9, 0), at(9, 30))
            .with_status(AppointmentStatus::Cancelled);
        assert_snapshot!(
            appointment_line(&appointment),
            @"a-1 Patient:p-1 Dentist:d-1 2026-01-01 09:00-2026-01-01 09:30 Status:cancelled"
        );
    }

    #[test]
    fn appointment_value_uses_wire_timestamps() {
        let appointment =
            Appointment::new("a-1", "p-1", "d-1", at(9, 0), at(9, 30)).with_notes("checkup");
        let value = appointment_value(&appointment);

        assert_eq!(value["start_time"], json!("2026-01-01T09:00:00"));
        assert_eq!(value["status"], json!("scheduled"));
        assert_eq!(value["notes"], json!("checkup"));
    }

    #[test]
    fn patient_value_carries_all_fields() {
        let patient = Patient::new("p-1", "Alice", "555-0100");
        let value = patient_value(&patient);

        assert_eq!(value["id"], json!("p-1"));
        assert_eq!(value["name"], json!("Alice"));
        assert_eq!(value["phone"], json!("555-0100"));
    }

    #[test]
    fn create_renderer_returns_text_for_text_format() {
        let _renderer = create_renderer(OutputFormat::Text);
    }

    #[test]
    fn create_renderer_returns_json_for_json_format() {
        let _renderer = create_renderer(OutputFormat::Json);
    }
}
