use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::utils::{client, dead_upstream, session_cookies, spawn_portal, spawn_upstream};

async fn day_schedule() -> Json<Value> {
    Json(json!({"appointments": [
        {"id": 42, "doctorId": 1, "patientId": 12,
         "patientName": "Priya Raman", "patientPhone": "555-0110",
         "patientEmail": "priya@example.com",
         "appointmentTime": "2026-08-07T09:30:00", "status": "pending"}
    ]}))
}

#[tokio::test]
async fn doctor_dashboard_renders_the_day_schedule() {
    let upstream = Router::new().route("/appointments", get(day_schedule));
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .get(format!("{}/doctor", app.address))
        .header("Cookie", session_cookies("doctor", "tok"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Priya Raman"));
    assert!(body.contains("09:30"));
    assert!(body.contains("Today's Appointments"));
    assert!(body.contains("/doctor/appointments/42/prescription"));
}

#[tokio::test]
async fn empty_day_renders_the_schedule_placeholder() {
    let upstream =
        Router::new().route("/appointments", get(|| async { Json(json!({"appointments": []})) }));
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .get(format!(
            "{}/doctor/appointments?date=2026-08-07&patient=",
            app.address
        ))
        .header("Cookie", session_cookies("doctor", "tok"))
        .send()
        .await
        .expect("request");

    let body = response.text().await.expect("body");
    assert!(body.contains("No Appointments found for today."));
}

#[tokio::test]
async fn unreachable_upstream_renders_the_schedule_error_row() {
    let app = spawn_portal(&dead_upstream().await).await;

    let response = client()
        .get(format!("{}/doctor", app.address))
        .header("Cookie", session_cookies("doctor", "tok"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Error loading appointments. Try again later."));
}

#[tokio::test]
async fn signup_success_banner_shows_the_server_message() {
    let upstream = Router::new()
        .route("/doctor", get(|| async { Json(json!({"doctors": []})) }))
        .route(
            "/patient",
            post(|| async {
                (
                    StatusCode::CREATED,
                    Json(json!({"message": "Signup successful"})),
                )
            }),
        );
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .post(format!("{}/signup/patient", app.address))
        .form(&[
            ("name", "Priya Raman"),
            ("email", "priya@example.com"),
            ("password", "pw"),
            ("phone", "555-0110"),
            ("address", "12 Garden Lane"),
        ])
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Signup successful"));
}

#[tokio::test]
async fn signup_conflict_preserves_the_server_message_verbatim() {
    let upstream = Router::new()
        .route("/doctor", get(|| async { Json(json!({"doctors": []})) }))
        .route(
            "/patient",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"error": "Patient with email id or phone no already exist"})),
                )
            }),
        );
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .post(format!("{}/signup/patient", app.address))
        .form(&[
            ("name", "Priya Raman"),
            ("email", "priya@example.com"),
            ("password", "pw"),
            ("phone", "555-0110"),
            ("address", ""),
        ])
        .send()
        .await
        .expect("request");

    let body = response.text().await.expect("body");
    assert!(body.contains("Patient with email id or phone no already exist"));
}

#[tokio::test]
async fn patient_sees_their_appointments_with_cancel_controls() {
    let upstream = Router::new()
        .route(
            "/patient/me",
            get(|| async {
                Json(json!({"patient": {"id": 12, "name": "Priya Raman",
                                        "email": "priya@example.com"}}))
            }),
        )
        .route(
            "/patient/:id/appointments",
            get(|Path(id): Path<i64>| async move {
                assert_eq!(id, 12);
                Json(json!({"appointments": [
                    {"id": 7, "doctorId": 1, "doctorName": "Dr. Amaka Eze",
                     "appointmentTime": "2026-08-09T10:00:00", "status": "pending"}
                ]}))
            }),
        );
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .get(format!("{}/patient/appointments", app.address))
        .header("Cookie", session_cookies("patient", "tok"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Dr. Amaka Eze"));
    assert!(body.contains("2026-08-09"));
    assert!(body.contains("/patient/appointments/7/cancel"));
}

#[tokio::test]
async fn appointment_filter_error_renders_something_went_wrong() {
    let upstream = Router::new().route(
        "/patient/filter",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal server error"})),
            )
        }),
    );
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .get(format!(
            "{}/patient/appointments/filter?condition=pending&name=",
            app.address
        ))
        .header("Cookie", session_cookies("patient", "tok"))
        .send()
        .await
        .expect("request");

    let body = response.text().await.expect("body");
    assert!(body.contains("Something went wrong!"));
}

#[tokio::test]
async fn booking_conflict_rerenders_the_form_with_the_server_message() {
    let upstream = Router::new()
        .route("/doctor", get(|| async {
            Json(json!({"doctors": [
                {"id": 4, "name": "Dr. Lena Fischer", "specialty": "Neurology"}
            ]}))
        }))
        .route(
            "/doctor/availability/:id/:date",
            get(|| async { Json(json!(["09:00", "10:00"])) }),
        )
        .route(
            "/appointments",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({"error": "Appointment slot is unavailable"})),
                )
            }),
        );
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .post(format!("{}/patient/book/4", app.address))
        .header("Cookie", session_cookies("patient", "tok"))
        .form(&[("date", "2026-08-09"), ("slot", "09:00")])
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Appointment slot is unavailable"));
    assert!(body.contains("Dr. Lena Fischer"));
}

#[tokio::test]
async fn cancel_success_banner_carries_the_server_message() {
    let upstream = Router::new()
        .route(
            "/patient/me",
            get(|| async {
                Json(json!({"patient": {"id": 12, "name": "Priya Raman",
                                        "email": "priya@example.com"}}))
            }),
        )
        .route(
            "/patient/:id/appointments",
            get(|| async { Json(json!({"appointments": []})) }),
        )
        .route(
            "/appointments/:id",
            axum::routing::delete(|| async {
                Json(json!({"message": "Appointment canceled successfully"}))
            }),
        );
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .post(format!("{}/patient/appointments/7/cancel", app.address))
        .header("Cookie", session_cookies("patient", "tok"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.expect("body");
    assert!(body.contains("Appointment canceled successfully"));
    assert!(body.contains("No appointments found."));
}
