//! reqwest-based SOAP client for the CRBR registry.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use std::time::Duration;
use tracing::{debug, warn};

use super::envelope::{CRBR_NAMESPACE, OPERATION, build_request, fault_code, is_client_fault};
use crate::domain::transport::{RegistryTransport, UpstreamOutcome};

/// SOAP client calling `PobierzInformacjeOSpolkachIBeneficjentach`.
///
/// One HTTP POST per lookup. Faults are classified, never retried.
pub struct SoapRegistryClient {
    http: reqwest::Client,
    endpoint: String,
    soap_action: HeaderValue,
}

impl SoapRegistryClient {
    /// Creates a client for the given service endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        let soap_action = HeaderValue::from_str(&format!("{CRBR_NAMESPACE}/{OPERATION}"))
            .unwrap_or_else(|_| HeaderValue::from_static(OPERATION));

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            soap_action,
        })
    }

    /// Service endpoint the client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RegistryTransport for SoapRegistryClient {
    async fn fetch(&self, nip: &str) -> UpstreamOutcome {
        let response = match self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", self.soap_action.clone())
            .body(build_request(nip))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return UpstreamOutcome::TransportError(format!("Request failed: {e}")),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return UpstreamOutcome::TransportError(format!(
                    "Failed to read response body (HTTP {status}): {e}"
                ));
            }
        };

        // A fault in the body wins over the HTTP status.
        match fault_code(&body) {
            Some(code) if is_client_fault(&code) => UpstreamOutcome::ClientFault,
            Some(code) => {
                warn!(%status, fault = %code, "Registry returned a SOAP fault");
                UpstreamOutcome::TransportError(format!("SOAP fault {code} (HTTP {status})"))
            }
            None if status.is_success() => {
                debug!(%status, bytes = body.len(), "Registry responded");
                UpstreamOutcome::Success(body)
            }
            None => UpstreamOutcome::TransportError(format!("Unexpected HTTP {status}")),
        }
    }
}
