//! Appointment scheduling and prescription endpoints.

use axum::http::StatusCode;
use chrono::NaiveDate;

use super::patients::AppointmentsEnvelope;
use super::types::{Appointment, BookingRequest, Prescription};
use super::{ClinicApi, MessageEnvelope, UpstreamError};

#[derive(Debug, serde::Deserialize)]
struct PrescriptionEnvelope {
    prescription: Prescription,
}

impl ClinicApi {
    /// `GET /appointments?date=&patient=` — a doctor's schedule for one
    /// day, optionally narrowed to a patient name.
    pub async fn appointments_for_day(
        &self,
        date: NaiveDate,
        patient: Option<&str>,
        token: &str,
    ) -> Result<Vec<Appointment>, UpstreamError> {
        let date = date.to_string();
        let mut params = vec![("date", date.as_str())];
        if let Some(patient) = patient {
            params.push(("patient", patient));
        }
        let request = Self::bearer(self.get("/appointments").query(&params), token);
        let envelope: AppointmentsEnvelope = self.send(request).await?;
        Ok(envelope.appointments)
    }

    /// `POST /appointments` — book a slot. Returns the server message.
    pub async fn book_appointment(
        &self,
        booking: &BookingRequest,
        token: &str,
    ) -> Result<String, UpstreamError> {
        let request = Self::bearer(self.post("/appointments"), token);
        let envelope: MessageEnvelope = self.send_json(request, booking).await?;
        Ok(envelope.unwrap_or("Appointment booked successfully"))
    }

    /// `DELETE /appointments/{id}` — cancel. Returns the server message.
    pub async fn cancel_appointment(&self, id: i64, token: &str) -> Result<String, UpstreamError> {
        let request = Self::bearer(self.delete(&format!("/appointments/{}", id)), token);
        let envelope: MessageEnvelope = self.send(request).await?;
        Ok(envelope.unwrap_or("Appointment canceled successfully"))
    }

    /// `POST /prescription` — save a prescription for an appointment.
    pub async fn save_prescription(
        &self,
        prescription: &Prescription,
        token: &str,
    ) -> Result<String, UpstreamError> {
        let request = Self::bearer(self.post("/prescription"), token);
        let envelope: MessageEnvelope = self.send_json(request, prescription).await?;
        Ok(envelope.unwrap_or("Prescription saved successfully"))
    }

    /// `GET /prescription/{appointment_id}` — the prescription written for
    /// an appointment, or `None` when there isn't one yet.
    pub async fn prescription_for_appointment(
        &self,
        appointment_id: i64,
        token: &str,
    ) -> Result<Option<Prescription>, UpstreamError> {
        let request = Self::bearer(
            self.get(&format!("/prescription/{}", appointment_id)),
            token,
        );
        match self.send::<PrescriptionEnvelope>(request).await {
            Ok(envelope) => Ok(Some(envelope.prescription)),
            Err(err) if err.status() == Some(StatusCode::NOT_FOUND) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
