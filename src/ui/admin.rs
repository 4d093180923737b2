//! Admin dashboard: the doctor roster.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::{CookieJar, Form};
use serde::Deserialize;
use std::sync::Arc;

use crate::session::{Role, Session};
use crate::upstream::Doctor;
use crate::AppState;

use super::templates::{doctor_cards, error_fragment, AdminDashboardTemplate, CardMode};
use super::{auth, or_empty, render_template};

const EMPTY_ROSTER: &str = "No doctors found.";
const EMPTY_FILTER: &str = "No doctors found with the given filters.";

fn admin_session(jar: &CookieJar) -> Option<Session> {
    Session::from_jar(jar).filter(|session| session.is(Role::Admin))
}

pub async fn dashboard(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if admin_session(&jar).is_none() {
        return Redirect::to("/").into_response();
    }
    render_dashboard(&state, None, None).await
}

/// Fetch the roster and render the full dashboard page, optionally with
/// a banner from a just-completed action.
pub(super) async fn render_dashboard(
    state: &AppState,
    notice: Option<String>,
    error: Option<String>,
) -> Response {
    let doctors = or_empty(state.api.list_doctors().await, "doctors");
    render_template(AdminDashboardTemplate {
        doctor_list: doctor_cards(&doctors, EMPTY_ROSTER, CardMode::Admin),
        notice,
        error,
    })
}

#[derive(Debug, Deserialize, Default)]
pub struct DoctorFilterQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub specialty: String,
}

pub async fn doctors_fragment(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(filter): Query<DoctorFilterQuery>,
) -> Response {
    if admin_session(&jar).is_none() {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match state
        .api
        .filter_doctors(&filter.name, &filter.time, &filter.specialty)
        .await
    {
        Ok(doctors) => Html(doctor_cards(&doctors, EMPTY_FILTER, CardMode::Admin)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Doctor filter failed");
            Html(error_fragment("An error occurred while filtering doctors")).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddDoctorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub specialty: String,
    /// One entry per checked availability checkbox
    #[serde(default)]
    pub availability: Vec<String>,
}

pub async fn add_doctor(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<AddDoctorForm>,
) -> Response {
    let Some(session) = admin_session(&jar) else {
        return auth::home_with_error("Admin not authenticated.", StatusCode::UNAUTHORIZED);
    };

    let doctor = Doctor {
        id: None,
        name: form.name,
        email: form.email,
        phone: form.phone,
        password: Some(form.password),
        specialty: form.specialty,
        available_times: form.availability,
    };

    match state.api.save_doctor(&doctor, &session.token).await {
        Ok(_) => render_dashboard(&state, Some("Doctor added successfully!".to_string()), None).await,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to add doctor");
            let message = format!(
                "Failed to add doctor: {}",
                err.message_or("Failed to add doctor")
            );
            render_dashboard(&state, None, Some(message)).await
        }
    }
}

pub async fn delete_doctor(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Response {
    let Some(session) = admin_session(&jar) else {
        return Redirect::to("/").into_response();
    };

    match state.api.delete_doctor(id, &session.token).await {
        Ok(message) => render_dashboard(&state, Some(message), None).await,
        Err(err) => {
            tracing::warn!(error = %err, doctor_id = id, "Failed to delete doctor");
            render_dashboard(&state, None, Some(err.message_or("Failed to delete doctor"))).await
        }
    }
}
