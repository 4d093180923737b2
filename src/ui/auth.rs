//! Landing page, logins, signup and logout.
//!
//! A successful login stores the upstream-issued token plus the role in
//! session cookies and redirects to the role's dashboard. Failures
//! re-render the page the form lives on with the role's banner copy.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

use crate::session::{Role, Session};
use crate::upstream::{AdminCredentials, Credentials, Patient, UpstreamError};
use crate::AppState;

use super::templates::HomeTemplate;
use super::{patient, render_template};

pub async fn home() -> Response {
    render_template(HomeTemplate::new(None))
}

pub(super) fn home_with_error(message: &str, status: StatusCode) -> Response {
    let page = render_template(HomeTemplate::new(Some(message.to_string())));
    (status, page).into_response()
}

/// Per-role copy for a failed login. A 401 means bad credentials; any
/// other failure gets the generic retry message.
fn login_failure_copy(err: &UpstreamError, invalid: &'static str, other: &'static str) -> (&'static str, StatusCode) {
    if err.is_unauthorized() {
        (invalid, StatusCode::UNAUTHORIZED)
    } else {
        (other, StatusCode::BAD_GATEWAY)
    }
}

#[derive(Debug, Deserialize)]
pub struct AdminLoginForm {
    pub username: String,
    pub password: String,
}

pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<AdminLoginForm>,
) -> Response {
    let credentials = AdminCredentials {
        username: form.username,
        password: form.password,
    };

    match state.api.admin_login(&credentials).await {
        Ok(token) => {
            let jar = Session::issue(jar, &token, Role::Admin);
            (jar, Redirect::to(Role::Admin.dashboard_path())).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Admin login failed");
            let (copy, status) = login_failure_copy(
                &err,
                "Invalid credentials!",
                "An error occurred during login. Please try again.",
            );
            home_with_error(copy, status)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub async fn doctor_login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let credentials = Credentials {
        email: form.email,
        password: form.password,
    };

    match state.api.doctor_login(&credentials).await {
        Ok(token) => {
            let jar = Session::issue(jar, &token, Role::Doctor);
            (jar, Redirect::to(Role::Doctor.dashboard_path())).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Doctor login failed");
            let (copy, status) = login_failure_copy(
                &err,
                "Invalid credentials!",
                "An error occurred during login. Please try again.",
            );
            home_with_error(copy, status)
        }
    }
}

pub async fn patient_login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let credentials = Credentials {
        email: form.email,
        password: form.password,
    };

    match state.api.patient_login(&credentials).await {
        Ok(token) => {
            let jar = Session::issue(jar, &token, Role::Patient);
            (jar, Redirect::to(Role::Patient.dashboard_path())).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Patient login failed");
            let (copy, status) = login_failure_copy(
                &err,
                "\u{274c} Invalid credentials!",
                "\u{274c} Failed to login. Please try again.",
            );
            // The patient login form lives on the browse page
            let page = patient::render_browse(&state, None, Some(copy.to_string())).await;
            (status, page).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
}

pub async fn patient_signup(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SignupForm>,
) -> Response {
    let patient = Patient {
        id: None,
        name: form.name,
        email: form.email,
        password: Some(form.password),
        phone: form.phone,
        address: form.address,
    };

    match state.api.patient_signup(&patient).await {
        Ok(message) => patient::render_browse(&state, Some(message), None).await,
        Err(err) => {
            tracing::warn!(error = %err, "Patient signup failed");
            // Keep the server's wording; it tells the user what was wrong
            let message = err.message_or("\u{274c} An error occurred while signing up.");
            patient::render_browse(&state, None, Some(message)).await
        }
    }
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (Session::clear(jar), Redirect::to("/"))
}
