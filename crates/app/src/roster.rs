use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use shared_types::{DeviceStatus, Patient, SensorStatus};

use crate::mock_data;

/// Clinic patient list, shared between the dashboard, the details page
/// and the add-patient form. Lives for the whole app session.
#[derive(Clone, Copy)]
pub struct ClinicRoster {
    pub patients: Signal<Vec<Patient>>,
}

impl ClinicRoster {
    pub fn new() -> Self {
        Self {
            patients: Signal::new(mock_data::clinic_patients(Utc::now())),
        }
    }

    pub fn find(&self, id: &str) -> Option<Patient> {
        self.patients.read().iter().find(|p| p.id == id).cloned()
    }

    /// Append a freshly registered patient and return its id.
    pub fn admit(&self, name: &str, email: &str, dob: &str) -> String {
        let patient = new_patient(name, email, dob, Utc::now());
        let id = patient.id.clone();
        tracing::info!(patient_id = %id, "patient added to roster");
        let mut patients = self.patients;
        patients.write().push(patient);
        id
    }
}

/// A patient with no readings yet and an unpaired device.
pub fn new_patient(name: &str, email: &str, dob: &str, now: DateTime<Utc>) -> Patient {
    Patient {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        dob: dob.to_string(),
        latest_bp: None,
        alerts: 0,
        device_status: DeviceStatus {
            battery: 100,
            last_sync: now,
            ppg_status: SensorStatus::Inactive,
            imu_status: SensorStatus::Inactive,
            is_connected: false,
        },
    }
}

pub fn use_roster() -> ClinicRoster {
    use_context::<ClinicRoster>()
}
