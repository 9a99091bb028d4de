mod config;
mod cors;
mod enhancement;
mod errors;
mod models;
mod resumes;
mod routes;
mod state;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cors::build_cors_layer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Editor API v{}", env!("CARGO_PKG_VERSION"));
    info!("Enhancement rule set: {}", config.enhancement_rules);
    info!(
        "Resume ids: {}, mirror directory: {}",
        config.id_strategy,
        config.resumes_dir.display()
    );

    let cors = build_cors_layer(&config.allowed_origins);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let state = AppState::from_config(config);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
