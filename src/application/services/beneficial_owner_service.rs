//! Beneficial owner lookup service.

use crate::domain::entities::BeneficialOwner;
use crate::domain::extractor::{ExtractError, parse_beneficial_owners};
use crate::domain::nip::is_valid_nip;
use crate::domain::transport::{RegistryTransport, UpstreamOutcome};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Service that resolves a NIP to the list of declared beneficial owners.
///
/// Performs at most one registry call per lookup. No caching or retries.
pub struct BeneficialOwnerService {
    transport: Arc<dyn RegistryTransport>,
}

impl BeneficialOwnerService {
    /// Creates a new lookup service.
    pub fn new(transport: Arc<dyn RegistryTransport>) -> Self {
        Self { transport }
    }

    /// Looks up beneficial owners for a NIP.
    ///
    /// # Outcomes
    ///
    /// - registry data → the extracted owners, in document order
    /// - registry client fault → `Ok(vec![])`
    /// - well-formed response without owners → `Ok(vec![])`
    ///
    /// An empty list is a regular result; turning it into a "not found"
    /// response is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the NIP fails validation; the
    /// registry is not contacted in that case.
    /// Returns [`AppError::UpstreamUnavailable`] on transport failure or an
    /// unparsable response, and [`AppError::Internal`] if the parsing task
    /// panics.
    pub async fn lookup(&self, nip: &str) -> Result<Vec<BeneficialOwner>, AppError> {
        if !is_valid_nip(nip) {
            debug!(nip, "Rejected invalid NIP");
            return Err(AppError::invalid_input(
                "Invalid NIP",
                json!({"nip": nip, "hint": "10 digits with a valid check digit"}),
            ));
        }

        match self.transport.fetch(nip).await {
            UpstreamOutcome::Success(document) => {
                let owners = parse_beneficial_owners(document)
                    .await
                    .map_err(|e| extract_failure(nip, e))?;

                debug!(nip, count = owners.len(), "Registry lookup completed");
                Ok(owners)
            }
            UpstreamOutcome::ClientFault => {
                // Also covers identifiers the registry does not know at all.
                info!(nip, "Registry reported a client fault, treating as no data");
                Ok(Vec::new())
            }
            UpstreamOutcome::TransportError(reason) => {
                error!(nip, reason = %reason, "Registry call failed");
                Err(AppError::upstream("Registry unavailable", json!({})))
            }
        }
    }
}

fn extract_failure(nip: &str, err: ExtractError) -> AppError {
    match err {
        ExtractError::Parse(e) => {
            error!(nip, error = %e, "Failed to parse registry response");
            AppError::upstream("Registry returned an unreadable response", json!({}))
        }
        ExtractError::Task(e) => {
            error!(nip, error = %e, "Registry response parser crashed");
            AppError::internal("Internal server error", json!({}))
        }
    }
}
