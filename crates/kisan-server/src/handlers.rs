//! HTTP Handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub static_dir: String,
    /// Whether the frontend bundle has been built into `static_dir`
    pub bundle_present: bool,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let bundle_present = tokio::fs::try_exists(state.config.index_file())
        .await
        .unwrap_or(false);

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        static_dir: state.config.static_dir.display().to_string(),
        bundle_present,
    })
}
