//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use url::Url;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Registry**: endpoint configuration only; the registry is not called
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": {
///       "status": "ok",
///       "message": "Endpoint: bramka-crbr.mf.gov.pl"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry_check = check_registry(&state);

    let all_healthy = registry_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: registry_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the registry endpoint is a usable URL.
fn check_registry(state: &AppState) -> CheckStatus {
    match Url::parse(&state.registry_endpoint) {
        Ok(url) if url.host_str().is_some() => CheckStatus {
            status: "ok".to_string(),
            message: url.host_str().map(|host| format!("Endpoint: {host}")),
        },
        _ => CheckStatus {
            status: "error".to_string(),
            message: Some("Registry endpoint is not a valid URL".to_string()),
        },
    }
}
