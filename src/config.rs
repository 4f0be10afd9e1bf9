//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export CRBR_ENDPOINT_URL="https://bramka-crbr.mf.gov.pl:5058/uslugiBiznesowe/uslugiESB/AP/ApiPrzegladoweCRBR/2022/12/01"
//! export CRBR_TIMEOUT_SECONDS="30"
//! export LISTEN="0.0.0.0:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:$PORT`)
//! - `PORT` - Port used when `LISTEN` is not set (default: `8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from proxy headers for rate limiting
//! - `CRBR_ENDPOINT_URL` - Registry SOAP endpoint (default: production gateway)
//! - `CRBR_TIMEOUT_SECONDS` - Registry request timeout (default: 30, max: 300)
//! - `ME_FIRST_NAME` / `ME_LAST_NAME` - Profile returned by `GET /me`

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Production CRBR review API endpoint.
pub const DEFAULT_REGISTRY_ENDPOINT: &str =
    "https://bramka-crbr.mf.gov.pl:5058/uslugiBiznesowe/uslugiESB/AP/ApiPrzegladoweCRBR/2022/12/01";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub registry_endpoint: String,
    pub registry_timeout_seconds: u64,
    pub me_first_name: String,
    pub me_last_name: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr().context("Failed to load listen address")?;
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let registry_endpoint = env::var("CRBR_ENDPOINT_URL")
            .unwrap_or_else(|_| DEFAULT_REGISTRY_ENDPOINT.to_string());

        let registry_timeout_seconds = env::var("CRBR_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let me_first_name = env::var("ME_FIRST_NAME").unwrap_or_else(|_| "TwojeImię".to_string());
        let me_last_name =
            env::var("ME_LAST_NAME").unwrap_or_else(|_| "TwojeNazwisko".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            registry_endpoint,
            registry_timeout_seconds,
            me_first_name,
            me_last_name,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT`
    /// 3. `0.0.0.0:8080`
    fn load_listen_addr() -> Result<String> {
        if let Ok(addr) = env::var("LISTEN") {
            return Ok(addr);
        }

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{port}'"))?,
            Err(_) => 8080,
        };

        Ok(format!("0.0.0.0:{port}"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `registry_endpoint` is not an absolute HTTP(S) URL
    /// - `registry_timeout_seconds` is 0 or greater than 300
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let endpoint = Url::parse(&self.registry_endpoint).with_context(|| {
            format!(
                "CRBR_ENDPOINT_URL is not a valid URL: '{}'",
                self.registry_endpoint
            )
        })?;
        if endpoint.scheme() != "https" && endpoint.scheme() != "http" {
            anyhow::bail!(
                "CRBR_ENDPOINT_URL must start with 'https://' or 'http://', got '{}'",
                self.registry_endpoint
            );
        }

        if self.registry_timeout_seconds == 0 || self.registry_timeout_seconds > 300 {
            anyhow::bail!(
                "CRBR_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.registry_timeout_seconds
            );
        }

        Ok(())
    }

    /// Registry request timeout.
    pub fn registry_timeout(&self) -> Duration {
        Duration::from_secs(self.registry_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Registry endpoint: {}", self.registry_endpoint);
        tracing::info!("  Registry timeout: {}s", self.registry_timeout_seconds);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
