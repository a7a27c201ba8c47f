//! KisanEdge static host
//!
//! Serves the built Leptos bundle with an SPA fallback, plus a health
//! endpoint. Lead submissions go straight from the browser to the external
//! backend; nothing here handles `/api/*`.

mod config;
mod handlers;
mod router;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::router::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    if tokio::fs::try_exists(config.index_file()).await.unwrap_or(false) {
        tracing::info!("✓ Frontend bundle found in {}", config.static_dir.display());
    } else {
        tracing::warn!("⚠ No index.html in {}", config.static_dir.display());
        tracing::warn!("  Build the frontend first: trunk build --release");
    }

    let addr = config.bind_addr.clone();
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🌱 KisanEdge running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  GET  /*      - Web frontend (SPA fallback to index.html)");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
