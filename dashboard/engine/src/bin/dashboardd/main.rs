// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]

mod config;

use anyhow::{Context, Result, anyhow};
use config::{DaemonConfig, TransportMode};
use dashboard_engine::adapters::rest::{build_router, serve_on_tcp};
use dashboard_engine::application::UseCaseRegistry;
use dashboard_engine::infrastructure::{InMemoryMetricsStore, load_seed_from_path};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = DaemonConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    config
        .validate()
        .map_err(|e| anyhow!("Invalid configuration: {e}"))?;

    info!(
        transport = ?config.transport_mode,
        seed_file = ?config.seed_file,
        "Starting dashboard daemon"
    );

    let store = Arc::new(InMemoryMetricsStore::new());
    match &config.seed_file {
        Some(path) => {
            load_seed_from_path(path)
                .and_then(|seed| seed.apply(&store))
                .with_context(|| format!("Failed to seed hierarchy from {path}"))?;
        }
        None => warn!("No DASHBOARD_SEED_FILE set, starting with an empty hierarchy"),
    }

    let registry = Arc::new(UseCaseRegistry::new(store));
    let app = build_router(registry);

    match config.transport_mode {
        TransportMode::Tcp => {
            let addr = config.socket_addr().map_err(|e| anyhow!(e))?;
            serve_on_tcp(addr, app, shutdown_signal())
                .await
                .context("REST server failed")?;
        }
        TransportMode::Unix => serve_unix(&config.rest_socket, app).await?,
    }

    info!("Dashboard daemon stopped");
    Ok(())
}

#[cfg(unix)]
async fn serve_unix(socket_path: &str, app: axum::Router) -> Result<()> {
    dashboard_engine::adapters::rest::serve_on_unix_socket(socket_path, app, shutdown_signal())
        .await
        .context("REST server failed")
}

#[cfg(not(unix))]
async fn serve_unix(_socket_path: &str, _app: axum::Router) -> Result<()> {
    Err(anyhow!("Unix sockets are not supported on this platform"))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
