//! JSON Appointment Repository
//!
//! Persists appointments in a single JSON array file
//! (`appointments.json`). Timestamps are stored as ISO 8601 naive
//! datetimes; records written before status and notes existed load with
//! `scheduled` and no notes.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Appointment;
use crate::domain::ports::{AppointmentRepository, StorageResult};
use crate::domain::value_objects::AppointmentStatus;
use crate::infrastructure::repositories::JsonStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonAppointment {
    id: String,
    patient_id: String,
    dentist_id: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    #[serde(default)]
    status: AppointmentStatus,
    #[serde(default)]
    notes: Option<String>,
}

impl From<&Appointment> for JsonAppointment {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id().to_string(),
            patient_id: appointment.patient_id().to_string(),
            dentist_id: appointment.dentist_id().to_string(),
            start_time: appointment.start_time(),
            end_time: appointment.end_time(),
            status: appointment.status(),
            notes: appointment.notes().map(str::to_string),
        }
    }
}

impl From<JsonAppointment> for Appointment {
    fn from(record: JsonAppointment) -> Self {
        let mut appointment = Appointment::new(
            record.id,
            record.patient_id,
            record.dentist_id,
            record.start_time,
            record.end_time,
        )
        .with_status(record.status);

        if let Some(notes) = record.notes {
            appointment = appointment.with_notes(notes);
        }

        appointment
    }
}

pub struct JsonAppointmentRepository {
    store: JsonStore,
}

impl JsonAppointmentRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl AppointmentRepository for JsonAppointmentRepository {
    fn add(&self, appointment: &Appointment) -> StorageResult<()> {
        let mut records: Vec<JsonAppointment> = self.store.load()?;
        records.push(appointment.into());
        self.store.save(&records)
    }

    fn get_by_id(&self, id: &str) -> StorageResult<Option<Appointment>> {
        let records: Vec<JsonAppointment> = self.store.load()?;
        Ok(records
            .into_iter()
            .find(|r| r.id == id)
            .map(Appointment::from))
    }

    fn list_all(&self) -> StorageResult<Vec<Appointment>> {
        let records: Vec<JsonAppointment> = self.store.load()?;
        Ok(records.into_iter().map(Appointment::from).collect())
    }

    fn update(&self, appointment: &Appointment) -> StorageResult<()> {
        let mut records: Vec<JsonAppointment> = self.store.load()?;
        records.retain(|r| r.id != appointment.id());
        records.push(appointment.into());
        self.store.save(&records)
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let mut records: Vec<JsonAppointment> = self.store.load()?;
        records.retain(|r| r.id != id);
        self.store.save(&records)
    }

    fn list_by_dentist_between(
        &self,
        dentist_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> StorageResult<Vec<Appointment>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|a| a.dentist_id() == dentist_id && a.overlaps(start, end))
            .collect())
    }

    fn list_by_patient(&self, patient_id: &str) -> StorageResult<Vec<Appointment>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|a| a.patient_id() == patient_id)
            .collect())
    }
}
