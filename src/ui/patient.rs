//! Patient pages: public doctor browsing plus the logged-in patient's
//! booking and appointment views.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::CookieJar;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use crate::session::{Role, Session};
use crate::upstream::{BookingRequest, Viewer};
use crate::AppState;

use super::admin::DoctorFilterQuery;
use super::templates::{
    doctor_cards, error_fragment, patient_appointment_rows, slot_options, BookingTemplate,
    CardMode, PatientAppointmentsTemplate, PatientBrowseTemplate, PatientHomeTemplate,
};
use super::{or_empty, render_template};

const EMPTY_DOCTORS: &str = "No doctors available.";
const EMPTY_FILTER: &str = "No doctors found with the given filters.";
const EMPTY_APPOINTMENTS: &str = "No appointments found.";
const APPOINTMENTS_ERROR: &str = "Something went wrong!";

fn patient_session(jar: &CookieJar) -> Option<Session> {
    Session::from_jar(jar).filter(|session| session.is(Role::Patient))
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Public browsing
// ---------------------------------------------------------------------------

pub async fn browse(State(state): State<Arc<AppState>>) -> Response {
    render_browse(&state, None, None).await
}

/// The public patient page; also the landing spot for signup/login
/// banners since both forms live here.
pub(super) async fn render_browse(
    state: &AppState,
    notice: Option<String>,
    error: Option<String>,
) -> Response {
    let doctors = or_empty(state.api.list_doctors().await, "doctors");
    render_template(PatientBrowseTemplate {
        doctor_list: doctor_cards(&doctors, EMPTY_DOCTORS, CardMode::Public),
        notice,
        error,
    })
}

pub async fn doctors_fragment(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<DoctorFilterQuery>,
) -> Response {
    filtered_cards(&state, &filter, CardMode::Public).await
}

async fn filtered_cards(state: &AppState, filter: &DoctorFilterQuery, mode: CardMode) -> Response {
    match state
        .api
        .filter_doctors(&filter.name, &filter.time, &filter.specialty)
        .await
    {
        Ok(doctors) => Html(doctor_cards(&doctors, EMPTY_FILTER, mode)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Doctor filter failed");
            Html(error_fragment(
                "\u{274c} An error occurred while filtering doctors.",
            ))
            .into_response()
        }
    }
}

// ---------------------------------------------------------------------------
// Logged-in patient
// ---------------------------------------------------------------------------

pub async fn home(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if patient_session(&jar).is_none() {
        return Redirect::to("/").into_response();
    }
    let doctors = or_empty(state.api.list_doctors().await, "doctors");
    render_template(PatientHomeTemplate {
        doctor_list: doctor_cards(&doctors, EMPTY_DOCTORS, CardMode::Book),
    })
}

pub async fn bookable_doctors_fragment(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(filter): Query<DoctorFilterQuery>,
) -> Response {
    if patient_session(&jar).is_none() {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    filtered_cards(&state, &filter, CardMode::Book).await
}

pub async fn appointments(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let Some(session) = patient_session(&jar) else {
        return Redirect::to("/").into_response();
    };
    render_appointments(&state, &session, None, None).await
}

/// The logged-in patient's appointment list with any action banner.
pub(super) async fn render_appointments(
    state: &AppState,
    session: &Session,
    notice: Option<String>,
    error: Option<String>,
) -> Response {
    let rows = match state.api.current_patient(&session.token).await {
        Ok(patient) => {
            let appointments = or_empty(
                state
                    .api
                    .patient_appointments(
                        patient.id.unwrap_or_default(),
                        Viewer::Patient,
                        &session.token,
                    )
                    .await,
                "appointments",
            );
            patient_appointment_rows(&appointments, EMPTY_APPOINTMENTS)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to resolve current patient");
            error_row(APPOINTMENTS_ERROR)
        }
    };

    render_template(PatientAppointmentsTemplate {
        rows,
        notice,
        error,
    })
}

fn error_row(message: &str) -> String {
    format!("<tr><td colspan=\"5\" class=\"error\">{}</td></tr>", message)
}

#[derive(Debug, Deserialize, Default)]
pub struct AppointmentFilterQuery {
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub name: String,
}

pub async fn appointments_fragment(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(filter): Query<AppointmentFilterQuery>,
) -> Response {
    let Some(session) = patient_session(&jar) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    match state
        .api
        .filter_patient_appointments(&filter.condition, &filter.name, &session.token)
        .await
    {
        Ok(appointments) => {
            Html(patient_appointment_rows(&appointments, EMPTY_APPOINTMENTS)).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Appointment filter failed");
            Html(error_row(APPOINTMENTS_ERROR)).into_response()
        }
    }
}

pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Response {
    let Some(session) = patient_session(&jar) else {
        return Redirect::to("/").into_response();
    };

    match state.api.cancel_appointment(id, &session.token).await {
        Ok(message) => render_appointments(&state, &session, Some(message), None).await,
        Err(err) => {
            tracing::warn!(error = %err, appointment_id = id, "Failed to cancel appointment");
            let message = err.message_or("Failed to cancel appointment");
            render_appointments(&state, &session, None, Some(message)).await
        }
    }
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default)]
pub struct BookingQuery {
    pub date: Option<String>,
}

fn parse_date(raw: Option<&str>) -> NaiveDate {
    raw.and_then(|raw| raw.parse().ok()).unwrap_or_else(today)
}

pub async fn booking_form(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(doctor_id): Path<i64>,
    Query(query): Query<BookingQuery>,
) -> Response {
    let Some(session) = patient_session(&jar) else {
        return Redirect::to("/").into_response();
    };

    let date = parse_date(query.date.as_deref());
    render_booking_form(&state, &session, doctor_id, date, None).await
}

async fn render_booking_form(
    state: &AppState,
    session: &Session,
    doctor_id: i64,
    date: NaiveDate,
    error: Option<String>,
) -> Response {
    // The upstream has no fetch-one endpoint; resolve the name from the
    // roster and fall back to the id when the doctor vanished meanwhile.
    let doctor_name = or_empty(state.api.list_doctors().await, "doctors")
        .into_iter()
        .find(|doctor| doctor.id == Some(doctor_id))
        .map(|doctor| doctor.name)
        .unwrap_or_else(|| format!("Doctor #{}", doctor_id));

    let slots = or_empty(
        state
            .api
            .doctor_availability(doctor_id, date, &session.token)
            .await,
        "availability",
    );

    render_template(BookingTemplate {
        doctor_id,
        doctor_name,
        date: date.to_string(),
        slot_options: slot_options(&slots),
        error,
    })
}

pub async fn slots_fragment(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(doctor_id): Path<i64>,
    Query(query): Query<BookingQuery>,
) -> Response {
    let Some(session) = patient_session(&jar) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    let date = parse_date(query.date.as_deref());
    match state
        .api
        .doctor_availability(doctor_id, date, &session.token)
        .await
    {
        Ok(slots) => Html(slot_options(&slots)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, doctor_id, "Failed to load availability");
            Html(String::new()).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub date: String,
    pub slot: String,
}

pub async fn book(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(doctor_id): Path<i64>,
    Form(form): Form<BookingForm>,
) -> Response {
    let Some(session) = patient_session(&jar) else {
        return Redirect::to("/").into_response();
    };

    let booking = BookingRequest {
        doctor_id,
        appointment_time: format!("{}T{}:00", form.date, form.slot),
    };

    match state.api.book_appointment(&booking, &session.token).await {
        Ok(message) => render_appointments(&state, &session, Some(message), None).await,
        Err(err) => {
            tracing::warn!(error = %err, doctor_id, "Failed to book appointment");
            let date = parse_date(Some(form.date.as_str()));
            let message = err.message_or("Failed to book appointment");
            render_booking_form(&state, &session, doctor_id, date, Some(message)).await
        }
    }
}
