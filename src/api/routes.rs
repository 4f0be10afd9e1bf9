//! API route configuration.

use crate::api::handlers::beneficial_owners_handler;
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Registry lookup routes, rate limited per client IP.
///
/// # Endpoints
///
/// - `GET /beneficial-owners/{nip}` - Beneficial owners for a company NIP
///
/// # Arguments
///
/// - `behind_proxy` - when `true`, the client IP is read from proxy headers
///   instead of the peer socket address
pub fn lookup_routes(behind_proxy: bool) -> Router<AppState> {
    let router = Router::new().route("/beneficial-owners/{nip}", get(beneficial_owners_handler));

    if behind_proxy {
        router.layer(rate_limit::proxy_layer())
    } else {
        router.layer(rate_limit::layer())
    }
}
