//! Doctor dashboard: the day's schedule and prescription writing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::CookieJar;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use crate::session::{Role, Session};
use crate::upstream::Prescription;
use crate::AppState;

use super::templates::{
    appointment_rows, DoctorDashboardTemplate, PrescriptionTemplate,
};
use super::render_template;

const EMPTY_SCHEDULE: &str = "No Appointments found for today.";
const SCHEDULE_ERROR: &str = "Error loading appointments. Try again later.";

fn doctor_session(jar: &CookieJar) -> Option<Session> {
    Session::from_jar(jar).filter(|session| session.is(Role::Doctor))
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Schedule rows for one day, already rendered. Failures become an
/// error row inside the table rather than a broken page.
async fn schedule_rows(
    state: &AppState,
    token: &str,
    date: NaiveDate,
    patient: Option<&str>,
) -> String {
    match state.api.appointments_for_day(date, patient, token).await {
        Ok(appointments) => appointment_rows(&appointments, EMPTY_SCHEDULE),
        Err(err) => {
            tracing::warn!(error = %err, %date, "Failed to load day schedule");
            format!(
                "<tr><td colspan=\"6\" class=\"error\">{}</td></tr>",
                SCHEDULE_ERROR
            )
        }
    }
}

pub async fn dashboard(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let Some(session) = doctor_session(&jar) else {
        return Redirect::to("/").into_response();
    };

    let date = today();
    let rows = schedule_rows(&state, &session.token, date, None).await;
    render_template(DoctorDashboardTemplate {
        date: date.to_string(),
        rows,
    })
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub date: Option<String>,
    pub patient: Option<String>,
}

pub async fn appointments_fragment(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<ScheduleQuery>,
) -> Response {
    let Some(session) = doctor_session(&jar) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    // An unparseable or missing date falls back to today
    let date = query
        .date
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(today);
    let patient = query
        .patient
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());

    Html(schedule_rows(&state, &session.token, date, patient).await).into_response()
}

pub async fn prescription_form(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(appointment_id): Path<i64>,
) -> Response {
    let Some(session) = doctor_session(&jar) else {
        return Redirect::to("/").into_response();
    };

    // Pre-fill when a prescription was already written for this visit
    let existing = state
        .api
        .prescription_for_appointment(appointment_id, &session.token)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, appointment_id, "Failed to look up prescription");
            None
        })
        .unwrap_or_default();

    render_template(prescription_template(appointment_id, existing, None, None))
}

#[derive(Debug, Deserialize)]
pub struct PrescriptionForm {
    #[serde(default)]
    pub patient_name: String,
    pub medication: String,
    pub dosage: String,
    #[serde(default)]
    pub doctor_notes: String,
}

pub async fn save_prescription(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(appointment_id): Path<i64>,
    Form(form): Form<PrescriptionForm>,
) -> Response {
    let Some(session) = doctor_session(&jar) else {
        return Redirect::to("/").into_response();
    };

    let prescription = Prescription {
        id: None,
        appointment_id,
        patient_name: form.patient_name,
        medication: form.medication,
        dosage: form.dosage,
        doctor_notes: form.doctor_notes,
    };

    match state
        .api
        .save_prescription(&prescription, &session.token)
        .await
    {
        Ok(message) => render_template(prescription_template(
            appointment_id,
            prescription,
            Some(message),
            None,
        )),
        Err(err) => {
            tracing::warn!(error = %err, appointment_id, "Failed to save prescription");
            let message = err.message_or("Failed to save prescription");
            render_template(prescription_template(
                appointment_id,
                prescription,
                None,
                Some(message),
            ))
        }
    }
}

fn prescription_template(
    appointment_id: i64,
    prescription: Prescription,
    notice: Option<String>,
    error: Option<String>,
) -> PrescriptionTemplate {
    PrescriptionTemplate {
        appointment_id,
        patient_name: prescription.patient_name,
        medication: prescription.medication,
        dosage: prescription.dosage,
        doctor_notes: prescription.doctor_notes,
        notice,
        error,
    }
}
