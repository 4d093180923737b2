//! Patient record and appointment-view endpoints.

use serde::Deserialize;

use super::types::{Appointment, Patient, Viewer};
use super::{ClinicApi, UpstreamError};

#[derive(Debug, Deserialize)]
struct PatientEnvelope {
    patient: Patient,
}

#[derive(Debug, Deserialize)]
pub(super) struct AppointmentsEnvelope {
    #[serde(default)]
    pub(super) appointments: Vec<Appointment>,
}

impl ClinicApi {
    /// `GET /patient/me` — the patient record behind the token.
    pub async fn current_patient(&self, token: &str) -> Result<Patient, UpstreamError> {
        let request = Self::bearer(self.get("/patient/me"), token);
        let envelope: PatientEnvelope = self.send(request).await?;
        Ok(envelope.patient)
    }

    /// `GET /patient/{id}/appointments?user=` — a patient's appointments,
    /// from the patient's or the treating doctor's point of view.
    pub async fn patient_appointments(
        &self,
        id: i64,
        viewer: Viewer,
        token: &str,
    ) -> Result<Vec<Appointment>, UpstreamError> {
        let request = Self::bearer(
            self.get(&format!("/patient/{}/appointments", id))
                .query(&[("user", viewer.as_str())]),
            token,
        );
        let envelope: AppointmentsEnvelope = self.send(request).await?;
        Ok(envelope.appointments)
    }

    /// `GET /patient/filter?condition=&name=` — the calling patient's
    /// appointments narrowed by status and/or doctor name. Both keys are
    /// always sent; blank means "don't narrow".
    pub async fn filter_patient_appointments(
        &self,
        condition: &str,
        name: &str,
        token: &str,
    ) -> Result<Vec<Appointment>, UpstreamError> {
        let request = Self::bearer(
            self.get("/patient/filter")
                .query(&[("condition", condition), ("name", name)]),
            token,
        );
        let envelope: AppointmentsEnvelope = self.send(request).await?;
        Ok(envelope.appointments)
    }
}
