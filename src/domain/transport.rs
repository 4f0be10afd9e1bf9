//! Contract between the lookup service and the registry transport.

use async_trait::async_trait;

/// Classified result of a single registry call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamOutcome {
    /// The registry answered; the raw SOAP/XML payload.
    Success(String),

    /// The registry reported a client-side fault: the request was understood
    /// but nothing matches the identifier.
    ClientFault,

    /// Any other failure (network, timeout, unexpected fault or status).
    TransportError(String),
}

/// Sends a lookup request for an already validated NIP to the registry.
///
/// # Implementations
///
/// - [`crate::infrastructure::soap::SoapRegistryClient`] - SOAP over HTTPS
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryTransport: Send + Sync {
    /// Performs one registry call. Never retried by callers.
    async fn fetch(&self, nip: &str) -> UpstreamOutcome;
}
