//! Worldbook Engine - Backend for the worldbuilding notebook
//!
//! The Engine keeps one notebook in memory and serves it over HTTP:
//! - Fixed sections (empire, hidden island, magic system, conflict, timeline)
//! - Randomly generated regions and subcultures with editable notes
//! - A summary panel with counts and average loyalty/integration
//!
//! Nothing is persisted; stopping the process discards the notebook.

mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worldbook_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Worldbook Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");

    let state = Arc::new(AppState::new(config));
    let addr = state.config.socket_addr()?;
    if let Some(seed) = state.config.rng_seed {
        tracing::info!("  Record generation seeded with {}", seed);
    }

    let app = http::router(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let server = axum::serve(listener, app);

    // Wait for shutdown signal (Ctrl+C)
    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received, notebook discarded");
        }
    }

    Ok(())
}
