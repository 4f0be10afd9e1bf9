//! Handler for beneficial owner lookup.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::beneficial_owner::BeneficialOwnerResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the beneficial owners registered for a company.
///
/// # Endpoint
///
/// `GET /beneficial-owners/{nip}`
///
/// # Request Flow
///
/// 1. Validate the NIP checksum (no registry call on failure)
/// 2. Query the CRBR registry over SOAP
/// 3. Extract owners from the response
///
/// # Response Codes
///
/// - **200 OK**: JSON array of owners in registry order
/// - **400 Bad Request**: `INVALID_NIP`
/// - **404 Not Found**: `NOT_FOUND`, the registry has no owners for this NIP
/// - **502 Bad Gateway**: `UPSTREAM_ERROR`
///
/// # Response
///
/// ```json
/// [
///   { "firstName": "Jan", "lastName": "Kowalski", "nationalId": "80010112345" }
/// ]
/// ```
pub async fn beneficial_owners_handler(
    Path(nip): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BeneficialOwnerResponse>>, AppError> {
    let owners = state.owner_service.lookup(&nip).await?;

    if owners.is_empty() {
        return Err(AppError::no_match(
            "No beneficial owners found",
            json!({"nip": nip}),
        ));
    }

    Ok(Json(owners.into_iter().map(Into::into).collect()))
}
