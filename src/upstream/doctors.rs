//! Doctor endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use super::types::Doctor;
use super::{ClinicApi, MessageEnvelope, UpstreamError};

/// List responses are wrapped: `{"doctors": [...]}`.
#[derive(Debug, Deserialize)]
struct DoctorsEnvelope {
    #[serde(default)]
    doctors: Vec<Doctor>,
}

impl ClinicApi {
    /// Fetch every doctor on file.
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, UpstreamError> {
        let envelope: DoctorsEnvelope = self.send(self.get("/doctor")).await?;
        Ok(envelope.doctors)
    }

    /// Filter doctors by name, availability and specialty.
    ///
    /// All three keys are always sent, blank when the filter is unset;
    /// the upstream treats blank values as wildcards.
    pub async fn filter_doctors(
        &self,
        name: &str,
        time: &str,
        specialty: &str,
    ) -> Result<Vec<Doctor>, UpstreamError> {
        let request = self
            .get("/doctor/filter")
            .query(&[("name", name), ("time", time), ("specialty", specialty)]);
        let envelope: DoctorsEnvelope = self.send(request).await?;
        Ok(envelope.doctors)
    }

    /// Add a doctor record (admin only). Returns the server message.
    pub async fn save_doctor(
        &self,
        doctor: &Doctor,
        token: &str,
    ) -> Result<String, UpstreamError> {
        let request = Self::bearer(self.post("/doctor/save"), token);
        let envelope: MessageEnvelope = self.send_json(request, doctor).await?;
        Ok(envelope.unwrap_or("Doctor added successfully"))
    }

    /// Update an existing doctor record (admin only).
    pub async fn update_doctor(
        &self,
        doctor: &Doctor,
        token: &str,
    ) -> Result<String, UpstreamError> {
        let request = Self::bearer(self.put("/doctor/update"), token);
        let envelope: MessageEnvelope = self.send_json(request, doctor).await?;
        Ok(envelope.unwrap_or("Doctor updated"))
    }

    /// Delete a doctor record (admin only). Returns the server message.
    pub async fn delete_doctor(&self, id: i64, token: &str) -> Result<String, UpstreamError> {
        let request = Self::bearer(self.delete(&format!("/doctor/delete/{}", id)), token);
        let envelope: MessageEnvelope = self.send(request).await?;
        Ok(envelope.unwrap_or("Doctor deleted successfully"))
    }

    /// Free slots for a doctor on a given date.
    pub async fn doctor_availability(
        &self,
        id: i64,
        date: NaiveDate,
        token: &str,
    ) -> Result<Vec<String>, UpstreamError> {
        let request = Self::bearer(
            self.get(&format!("/doctor/availability/{}/{}", id, date)),
            token,
        );
        self.send(request).await
    }
}
