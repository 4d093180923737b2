//! Wire types for the clinic API.
//!
//! The upstream is a Java service, so JSON keys are camelCase. Records
//! are passed through the portal untouched; fields default instead of
//! failing the parse when the upstream omits them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Only populated when creating or updating a record; the upstream
    /// never echoes it back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub specialty: String,
    /// Free slot labels, e.g. "09:00"
    #[serde(default)]
    pub available_times: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub doctor_id: i64,
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default)]
    pub patient_id: i64,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub patient_phone: String,
    #[serde(default)]
    pub patient_email: String,
    /// ISO date-time as the upstream formats it, e.g. "2026-08-07T09:00:00"
    #[serde(default)]
    pub appointment_time: String,
    /// "pending", "consulted", "prescribed"
    #[serde(default)]
    pub status: String,
}

impl Appointment {
    /// Date and time halves of `appointment_time`, for table cells.
    pub fn date(&self) -> &str {
        self.appointment_time
            .split('T')
            .next()
            .unwrap_or(&self.appointment_time)
    }

    pub fn time(&self) -> &str {
        let time = self
            .appointment_time
            .split('T')
            .nth(1)
            .unwrap_or_default();
        // "09:00:00" reads better as "09:00"
        time.get(..5).unwrap_or(time)
    }
}

/// Body for `POST /appointments`. The upstream resolves the patient from
/// the bearer token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub doctor_id: i64,
    pub appointment_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub appointment_id: i64,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub medication: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub doctor_notes: String,
}

/// Whose view of a patient's appointments is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Patient,
    Doctor,
}

impl Viewer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Viewer::Patient => "patient",
            Viewer::Doctor => "doctor",
        }
    }
}
