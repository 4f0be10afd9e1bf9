//! Handler for the static profile endpoint.

use axum::{Json, extract::State};

use crate::api::dto::me::MeResponse;
use crate::state::AppState;

/// `GET /me`: returns the configured profile.
pub async fn me_handler(State(state): State<AppState>) -> Json<MeResponse> {
    Json(MeResponse::from(state.profile.as_ref()))
}
