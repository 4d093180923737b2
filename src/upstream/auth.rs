//! Login and signup endpoints.
//!
//! Every login speaks the same contract: credentials in, opaque token
//! out. The upstream decides validity; the portal only stores the token.

use serde::Serialize;

use super::types::Patient;
use super::{ClinicApi, MessageEnvelope, UpstreamError};

/// Email/password pair used by doctor and patient logins.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Admins authenticate by username instead of email.
#[derive(Debug, Clone, Serialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, serde::Deserialize)]
struct TokenEnvelope {
    token: String,
}

impl ClinicApi {
    /// `POST /admin` — returns the session token.
    pub async fn admin_login(
        &self,
        credentials: &AdminCredentials,
    ) -> Result<String, UpstreamError> {
        let envelope: TokenEnvelope = self.send_json(self.post("/admin"), credentials).await?;
        Ok(envelope.token)
    }

    /// `POST /doctor/login` — returns the session token.
    pub async fn doctor_login(&self, credentials: &Credentials) -> Result<String, UpstreamError> {
        let envelope: TokenEnvelope = self
            .send_json(self.post("/doctor/login"), credentials)
            .await?;
        Ok(envelope.token)
    }

    /// `POST /patient/login` — returns the session token.
    pub async fn patient_login(&self, credentials: &Credentials) -> Result<String, UpstreamError> {
        let envelope: TokenEnvelope = self
            .send_json(self.post("/patient/login"), credentials)
            .await?;
        Ok(envelope.token)
    }

    /// `POST /patient` — register a new patient. Returns the server
    /// message; a signup rejection keeps the server's wording (the
    /// duplicate-account hint matters to the user).
    pub async fn patient_signup(&self, patient: &Patient) -> Result<String, UpstreamError> {
        let envelope: MessageEnvelope = self.send_json(self.post("/patient"), patient).await?;
        Ok(envelope.unwrap_or("Signup successful"))
    }
}
