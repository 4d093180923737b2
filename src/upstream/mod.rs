//! Typed client for the clinic REST API.
//!
//! Every portal feature goes through [`ClinicApi`]: one shared
//! `reqwest::Client`, the configured base URL, and a single error type
//! ([`UpstreamError`]) for all calls. Session tokens travel as an
//! `Authorization: Bearer` header, never inside the URL.
//!
//! Per-resource operations live in the sibling modules (`doctors`,
//! `patients`, `auth`, `appointments`); this module owns the request
//! plumbing they share.

mod appointments;
mod auth;
mod doctors;
mod error;
mod patients;
mod types;

pub use auth::{AdminCredentials, Credentials};
pub use error::UpstreamError;
pub use types::{Appointment, BookingRequest, Doctor, Patient, Prescription, Viewer};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::UpstreamConfig;

/// Client for the clinic API.
#[derive(Debug, Clone)]
pub struct ClinicApi {
    base_url: String,
    client: reqwest::Client,
}

impl ClinicApi {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("CareDesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client for the clinic API")?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path))
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path))
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path))
    }

    fn bearer(builder: reqwest::RequestBuilder, token: &str) -> reqwest::RequestBuilder {
        builder.header("Authorization", format!("Bearer {}", token))
    }

    /// Send a request and decode a JSON body, mapping every failure mode
    /// onto [`UpstreamError`].
    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, UpstreamError> {
        let response = builder.send().await.map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::from_response(status, &body));
        }

        response.json().await.map_err(UpstreamError::Decode)
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        body: &B,
    ) -> Result<T, UpstreamError> {
        self.send(builder.json(body)).await
    }
}

/// Success envelope shared by the mutating endpoints: `{"message": "..."}`.
#[derive(Debug, serde::Deserialize)]
struct MessageEnvelope {
    #[serde(default)]
    message: String,
}

impl MessageEnvelope {
    /// The server's message, or `default` when the body carried none.
    fn unwrap_or(self, default: &str) -> String {
        if self.message.is_empty() {
            default.to_string()
        } else {
            self.message
        }
    }
}
