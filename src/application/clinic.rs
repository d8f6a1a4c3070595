//! Clinic Use Cases
//!
//! Orchestrates scheduling: registering people, booking slots with
//! conflict detection, cancellation, and the calendar reads behind the
//! UI. Every rule runs before anything is written, so a rejected
//! request leaves storage untouched.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::domain::entities::{Appointment, Dentist, Patient};
use crate::domain::ports::{AppointmentRepository, DentistRepository, PatientRepository};
use crate::domain::value_objects::AppointmentStatus;
use crate::error::{ClinicError, ClinicResult};

/// Scheduling use cases, parameterized by repository ports
///
/// Booking validation order is fixed: time range, then patient, then
/// dentist, then calendar conflicts.
pub struct ClinicService<P, D, A>
where
    P: PatientRepository,
    D: DentistRepository,
    A: AppointmentRepository,
{
    patients: P,
    dentists: D,
    appointments: A,
}

impl<P, D, A> ClinicService<P, D, A>
where
    P: PatientRepository,
    D: DentistRepository,
    A: AppointmentRepository,
{
    pub fn new(patients: P, dentists: D, appointments: A) -> Self {
        Self {
            patients,
            dentists,
            appointments,
        }
    }

    /// Register a new patient and return the stored record
    pub fn register_patient(&self, name: &str, phone: &str) -> ClinicResult<Patient> {
        let patient = Patient::new(Uuid::new_v4().to_string(), name, phone);
        self.patients.add(&patient)?;
        Ok(patient)
    }

    /// Add a dentist to the roster and return the stored record
    pub fn add_dentist(&self, name: &str, specialty: &str) -> ClinicResult<Dentist> {
        let dentist = Dentist::new(Uuid::new_v4().to_string(), name, specialty);
        self.dentists.add(&dentist)?;
        Ok(dentist)
    }

    /// Book an appointment
    ///
    /// Rejects empty or inverted time ranges, unknown patient or
    /// dentist ids, and any slot that overlaps a scheduled appointment
    /// for the same dentist. Cancelled appointments never block a slot.
    pub fn schedule_appointment(
        &self,
        patient_id: &str,
        dentist_id: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        notes: Option<&str>,
    ) -> ClinicResult<Appointment> {
        if start_time >= end_time {
            return Err(ClinicError::InvalidRange {
                start: start_time,
                end: end_time,
            });
        }

        if self.patients.get_by_id(patient_id)?.is_none() {
            return Err(ClinicError::PatientNotFound {
                id: patient_id.to_string(),
            });
        }

        if self.dentists.get_by_id(dentist_id)?.is_none() {
            return Err(ClinicError::DentistNotFound {
                id: dentist_id.to_string(),
            });
        }

        let conflicts: Vec<Appointment> = self
            .appointments
            .list_by_dentist_between(dentist_id, start_time, end_time)?
            .into_iter()
            .filter(|a| a.is_scheduled())
            .collect();
        if !conflicts.is_empty() {
            return Err(ClinicError::Conflict {
                dentist_id: dentist_id.to_string(),
                count: conflicts.len(),
            });
        }

        let mut appointment = Appointment::new(
            Uuid::new_v4().to_string(),
            patient_id,
            dentist_id,
            start_time,
            end_time,
        );
        if let Some(notes) = notes {
            appointment = appointment.with_notes(notes);
        }

        self.appointments.add(&appointment)?;
        Ok(appointment)
    }

    /// Cancel an appointment, keeping it in history
    ///
    /// The stored record is replaced by a copy with status `cancelled`;
    /// id, slot, and notes are untouched. Returns the cancelled record.
    pub fn cancel_appointment(&self, appointment_id: &str) -> ClinicResult<Appointment> {
        let appointment = self
            .appointments
            .get_by_id(appointment_id)?
            .ok_or_else(|| ClinicError::AppointmentNotFound {
                id: appointment_id.to_string(),
            })?;

        let cancelled = appointment.with_status(AppointmentStatus::Cancelled);
        self.appointments.update(&cancelled)?;
        Ok(cancelled)
    }

    /// All patients, in stored order
    pub fn list_patients(&self) -> ClinicResult<Vec<Patient>> {
        Ok(self.patients.list()?)
    }

    /// All dentists, in stored order
    pub fn list_dentists(&self) -> ClinicResult<Vec<Dentist>> {
        Ok(self.dentists.list()?)
    }

    /// All appointments of every status, in stored order
    pub fn list_appointments(&self) -> ClinicResult<Vec<Appointment>> {
        Ok(self.appointments.list_all()?)
    }

    /// All appointments booked for one patient, in stored order
    pub fn list_appointments_for_patient(
        &self,
        patient_id: &str,
    ) -> ClinicResult<Vec<Appointment>> {
        Ok(self.appointments.list_by_patient(patient_id)?)
    }
}
