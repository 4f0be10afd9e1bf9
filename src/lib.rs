//! # CRBR Gateway
//!
//! HTTP gateway that looks up the beneficial owners of Polish companies in the
//! Central Register of Beneficial Owners (CRBR), queried over SOAP.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - NIP validation, XML navigation, owner extraction
//! - **Application Layer** ([`application`]) - Lookup orchestration and error mapping
//! - **Infrastructure Layer** ([`infrastructure`]) - SOAP client for the registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Lookup outcomes
//!
//! - invalid NIP → `400 INVALID_NIP`, the registry is not contacted
//! - owners found → `200` with a JSON array
//! - registry has no data (including client faults) → `404 NOT_FOUND`
//! - transport failure or unreadable response → `502 UPSTREAM_ERROR`
//!
//! ## Quick Start
//!
//! ```bash
//! export CRBR_ENDPOINT_URL="https://bramka-crbr.mf.gov.pl:5058/uslugiBiznesowe/uslugiESB/AP/ApiPrzegladoweCRBR/2022/12/01"
//! cargo run
//! curl http://localhost:8080/beneficial-owners/1234563218
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::BeneficialOwnerService;
    pub use crate::domain::entities::BeneficialOwner;
    pub use crate::domain::transport::{RegistryTransport, UpstreamOutcome};
    pub use crate::error::AppError;
    pub use crate::state::{AppState, Profile};
}
