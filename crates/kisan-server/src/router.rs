//! Route table
//!
//! `/health` plus the frontend bundle. Any path that is not a file in the
//! bundle gets `index.html`, so client-side routes survive a reload.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::health_check;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend = ServeDir::new(&state.config.static_dir)
        .fallback(ServeFile::new(state.config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;

    const INDEX: &str = "<!doctype html><title>KisanEdge</title>";

    fn bundle_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kisan-server-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), INDEX).unwrap();
        std::fs::write(dir.join("kisan_web.js"), "export default 1;").unwrap();
        dir
    }

    fn app(static_dir: PathBuf) -> Router {
        build_router(AppState::new(ServerConfig {
            bind_addr: "127.0.0.1:0".into(),
            static_dir,
        }))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_bundle() {
        let dir = bundle_dir();
        let (status, body) = get(app(dir.clone()), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["bundle_present"], true);
        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_health_without_bundle() {
        let dir = std::env::temp_dir().join(format!("kisan-missing-{}", uuid::Uuid::new_v4()));
        let (status, body) = get(app(dir), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["bundle_present"], false);
    }

    #[tokio::test]
    async fn test_serves_bundle_files() {
        let dir = bundle_dir();
        let (status, body) = get(app(dir.clone()), "/kisan_web.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = bundle_dir();
        for route in ["/", "/plans", "/callback", "/enroll"] {
            let (status, body) = get(app(dir.clone()), route).await;
            assert_eq!(status, StatusCode::OK, "{route}");
            assert_eq!(body, INDEX, "{route}");
        }
        std::fs::remove_dir_all(dir).ok();
    }
}
