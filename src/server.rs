//! HTTP server initialization and runtime setup.
//!
//! Handles logging setup, registry client construction, and Axum server lifecycle.

use crate::application::services::BeneficialOwnerService;
use crate::config::Config;
use crate::infrastructure::soap::SoapRegistryClient;
use crate::routes::app_router;
use crate::state::{AppState, Profile};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Uses `RUST_LOG`-style directives from `config.log_level` and the
/// `text` or `json` formatter selected by `config.log_format`.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG directives: '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
    }
}

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the registry HTTP client cannot be created.
pub fn build_state(config: &Config) -> Result<AppState> {
    let client = SoapRegistryClient::new(&config.registry_endpoint, config.registry_timeout())
        .context("Failed to create registry client")?;
    tracing::info!("Registry client ready: {}", client.endpoint());

    let owner_service = Arc::new(BeneficialOwnerService::new(Arc::new(client)));

    let profile = Profile {
        first_name: config.me_first_name.clone(),
        last_name: config.me_last_name.clone(),
    };

    Ok(AppState::new(
        owner_service,
        profile,
        config.registry_endpoint.as_str(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - CRBR SOAP client
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The registry client cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
