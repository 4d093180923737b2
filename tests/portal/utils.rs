//! Test scaffolding: spawn the portal against a mock clinic API, both on
//! ephemeral ports, and drive them with a plain reqwest client.

use axum::Router;
use std::sync::Arc;

use caredesk::config::Config;
use caredesk::upstream::ClinicApi;
use caredesk::AppState;

pub struct TestApp {
    pub address: String,
}

/// Serve `router` as the stand-in clinic API; returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("mock upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("serve mock upstream");
    });
    format!("http://{}", addr)
}

/// A base URL with nothing listening behind it.
pub async fn dead_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Boot the portal pointed at `upstream_base`.
pub async fn spawn_portal(upstream_base: &str) -> TestApp {
    let mut config = Config::default();
    config.upstream.base_url = upstream_base.to_string();
    config.upstream.timeout_secs = 2;

    let api = ClinicApi::new(&config.upstream).expect("build clinic client");
    let state = Arc::new(AppState::new(config, api));
    let app = caredesk::create_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind portal");
    let address = format!("http://{}", listener.local_addr().expect("portal addr"));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve portal");
    });

    TestApp { address }
}

/// Client that does not follow redirects, so tests can assert on them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("build test client")
}

/// Cookie header for a signed-in test user.
pub fn session_cookies(role: &str, token: &str) -> String {
    format!("caredesk_token={}; caredesk_role={}", token, role)
}
