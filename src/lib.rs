pub mod config;
pub mod session;
pub mod ui;
pub mod upstream;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::Config;
use upstream::ClinicApi;

pub struct AppState {
    pub config: Config,
    pub api: ClinicApi,
}

impl AppState {
    pub fn new(config: Config, api: ClinicApi) -> Self {
        Self { config, api }
    }
}

/// Assemble the full application router: portal pages, health probe and
/// static assets.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(ui::create_router())
        .route("/health", get(health_check))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
