//! Account Limits Service - Main Application Entry Point
//!
//! A REST API server for creating accounts and moving money in and out of
//! them. Every deposit and withdrawal passes a limit policy: the balance
//! must cover withdrawals, and per-transaction amount, per-day amount and
//! per-day count caps apply separately to deposits and withdrawals.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-memory account store and transaction log behind traits
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the stores and services
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod app;
mod clock;
mod config;
mod error;
mod handlers;
mod models;
mod services;
mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!(?config, "Configuration loaded");

    let state = app::AppState::in_memory(config.limit_policy(), Arc::new(clock::SystemClock));
    let app = app::router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
