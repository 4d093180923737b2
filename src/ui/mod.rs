//! Server-rendered portal pages.
//!
//! Askama templates + HTMX fragments. Each dashboard fetches its data
//! from the clinic API on load; filter inputs re-request an HTML
//! fragment on every change, and `hx-sync` aborts the in-flight request
//! when a newer one fires, so stale responses never land.

mod admin;
mod auth;
mod doctor;
mod patient;
pub mod templates;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::upstream::UpstreamError;
use crate::AppState;

pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        // Landing page and auth
        .route("/", get(auth::home))
        .route("/login/admin", post(auth::admin_login))
        .route("/login/doctor", post(auth::doctor_login))
        .route("/login/patient", post(auth::patient_login))
        .route("/signup/patient", post(auth::patient_signup))
        .route("/logout", get(auth::logout))
        // Admin dashboard
        .route("/admin", get(admin::dashboard))
        .route(
            "/admin/doctors",
            get(admin::doctors_fragment).post(admin::add_doctor),
        )
        .route("/admin/doctors/:id/delete", post(admin::delete_doctor))
        // Doctor dashboard
        .route("/doctor", get(doctor::dashboard))
        .route("/doctor/appointments", get(doctor::appointments_fragment))
        .route(
            "/doctor/appointments/:id/prescription",
            get(doctor::prescription_form).post(doctor::save_prescription),
        )
        // Patient pages
        .route("/patient", get(patient::browse))
        .route("/patient/doctors", get(patient::doctors_fragment))
        .route("/patient/home", get(patient::home))
        .route("/patient/home/doctors", get(patient::bookable_doctors_fragment))
        .route("/patient/appointments", get(patient::appointments))
        .route(
            "/patient/appointments/filter",
            get(patient::appointments_fragment),
        )
        .route(
            "/patient/appointments/:id/cancel",
            post(patient::cancel_appointment),
        )
        .route(
            "/patient/book/:doctor_id",
            get(patient::booking_form).post(patient::book),
        )
        .route("/patient/book/:doctor_id/slots", get(patient::slots_fragment))
}

/// Render a template, mapping render failures to a 500.
fn render_template<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Degrade a failed list fetch to the empty list so pages render their
/// placeholder instead of an error page.
fn or_empty<T>(result: Result<Vec<T>, UpstreamError>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch {what}, rendering empty list");
            Vec::new()
        }
    }
}
