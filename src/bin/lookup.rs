//! Command-line beneficial owner lookup.
//!
//! Performs a single registry lookup without starting the HTTP server. Uses
//! the same environment configuration as the service.
//!
//! # Usage
//!
//! ```bash
//! # Print owners as a table
//! cargo run --bin lookup -- 1234563218
//!
//! # Print owners as JSON (same shape as the HTTP API)
//! cargo run --bin lookup -- 1234563218 --json
//!
//! # Only check the NIP checksum, no registry call
//! cargo run --bin lookup -- 1234563218 --validate-only
//! ```
//!
//! # Exit Codes
//!
//! - `0` - owners found (or NIP valid with `--validate-only`)
//! - `1` - invalid NIP
//! - `2` - no beneficial owners found
//! - `3` - registry error

use crbr_gateway::api::dto::beneficial_owner::BeneficialOwnerResponse;
use crbr_gateway::application::services::BeneficialOwnerService;
use crbr_gateway::config::Config;
use crbr_gateway::domain::entities::BeneficialOwner;
use crbr_gateway::domain::nip::is_valid_nip;
use crbr_gateway::error::AppError;
use crbr_gateway::infrastructure::soap::SoapRegistryClient;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::process::ExitCode;
use std::sync::Arc;

/// Look up beneficial owners of a company in the CRBR registry.
#[derive(Parser)]
#[command(name = "lookup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Company NIP (10 digits)
    nip: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Only validate the NIP checksum
    #[arg(long)]
    validate_only: bool,

    /// Registry endpoint (overrides configuration)
    #[arg(long, env = "CRBR_ENDPOINT_URL")]
    endpoint: Option<String>,

    /// Request timeout in seconds (overrides configuration)
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.validate_only {
        return Ok(print_validation(&cli.nip));
    }

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(endpoint) = cli.endpoint {
        config.registry_endpoint = endpoint;
    }
    if let Some(timeout) = cli.timeout {
        config.registry_timeout_seconds = timeout;
    }
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .init();

    let client = SoapRegistryClient::new(&config.registry_endpoint, config.registry_timeout())
        .context("Failed to create registry client")?;
    let service = BeneficialOwnerService::new(Arc::new(client));

    match service.lookup(&cli.nip).await {
        Ok(owners) if owners.is_empty() => {
            eprintln!("{} No beneficial owners found for {}", "○".yellow(), cli.nip);
            Ok(ExitCode::from(2))
        }
        Ok(owners) => {
            if cli.json {
                print_json(owners)?;
            } else {
                print_table(&cli.nip, &owners);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            Ok(match e {
                AppError::InvalidInput { .. } => ExitCode::from(1),
                _ => ExitCode::from(3),
            })
        }
    }
}

fn print_validation(nip: &str) -> ExitCode {
    if is_valid_nip(nip) {
        println!("{} {} is a valid NIP", "✓".green().bold(), nip);
        ExitCode::SUCCESS
    } else {
        println!("{} {} is not a valid NIP", "✗".red().bold(), nip);
        ExitCode::from(1)
    }
}

fn print_json(owners: Vec<BeneficialOwner>) -> Result<()> {
    let response: Vec<BeneficialOwnerResponse> = owners.into_iter().map(Into::into).collect();
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn print_table(nip: &str, owners: &[BeneficialOwner]) {
    println!(
        "\n{} {}\n",
        "Beneficial owners of".bold(),
        nip.cyan().bold()
    );
    println!("{:<30} {:<15}", "Name".bold(), "PESEL".bold());
    println!("{}", "─".repeat(46));

    for owner in owners {
        let name = owner
            .display_name()
            .unwrap_or_else(|| "(no name)".dimmed().to_string());
        let pesel = owner.national_id.as_deref().unwrap_or("-");
        println!("{:<30} {:<15}", name, pesel);
    }

    println!("\n{} {}", "Total:".bold(), owners.len());
}
