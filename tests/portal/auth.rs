use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use crate::utils::{client, session_cookies, spawn_portal, spawn_upstream};

#[tokio::test]
async fn admin_login_sets_cookies_and_redirects_to_admin_dashboard() {
    let upstream = Router::new().route("/admin", post(|| async { Json(json!({"token": "abc"})) }));
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .post(format!("{}/login/admin", app.address))
        .form(&[("username", "front-desk"), ("password", "pw")])
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], "/admin");

    let cookies: Vec<String> = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|value| value.to_str().expect("cookie header").to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("caredesk_token=abc")));
    assert!(cookies.iter().any(|c| c.starts_with("caredesk_role=admin")));
}

#[tokio::test]
async fn doctor_login_redirects_to_doctor_dashboard() {
    let upstream = Router::new().route(
        "/doctor/login",
        post(|| async { Json(json!({"token": "doc-token"})) }),
    );
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .post(format!("{}/login/doctor", app.address))
        .form(&[("email", "amaka@clinic.example"), ("password", "pw")])
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], "/doctor");
}

#[tokio::test]
async fn rejected_admin_login_renders_invalid_credentials() {
    let upstream = Router::new().route(
        "/admin",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"message": "Admin not found"})),
            )
        }),
    );
    let app = spawn_portal(&spawn_upstream(upstream).await).await;

    let response = client()
        .post(format!("{}/login/admin", app.address))
        .form(&[("username", "nobody"), ("password", "pw")])
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 401);
    let body = response.text().await.expect("body");
    assert!(body.contains("Invalid credentials!"));
}

#[tokio::test]
async fn protected_dashboards_redirect_anonymous_browsers_home() {
    let app = spawn_portal(&spawn_upstream(Router::new()).await).await;

    for path in ["/admin", "/doctor", "/patient/home", "/patient/appointments"] {
        let response = client()
            .get(format!("{}{}", app.address, path))
            .send()
            .await
            .expect("request");
        assert_eq!(response.status().as_u16(), 303, "path {}", path);
        assert_eq!(response.headers()["location"], "/", "path {}", path);
    }
}

#[tokio::test]
async fn role_mismatch_is_not_enough_for_another_dashboard() {
    let app = spawn_portal(&spawn_upstream(Router::new()).await).await;

    let response = client()
        .get(format!("{}/admin", app.address))
        .header("Cookie", session_cookies("patient", "tok"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], "/");
}

#[tokio::test]
async fn logout_expires_session_cookies() {
    let app = spawn_portal(&spawn_upstream(Router::new()).await).await;

    let response = client()
        .get(format!("{}/logout", app.address))
        .header("Cookie", session_cookies("admin", "tok"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], "/");

    let cookies: Vec<String> = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|value| value.to_str().expect("cookie header").to_string())
        .collect();
    // Removal cookies are issued for both halves of the session
    assert!(cookies.iter().any(|c| c.starts_with("caredesk_token=")));
    assert!(cookies.iter().any(|c| c.starts_with("caredesk_role=")));
}
