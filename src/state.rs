//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::BeneficialOwnerService;

/// State shared by all handlers. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub owner_service: Arc<BeneficialOwnerService>,
    pub profile: Arc<Profile>,
    /// Registry endpoint, reported by the health check.
    pub registry_endpoint: Arc<str>,
}

/// Static profile served by `GET /me`.
#[derive(Debug, Clone)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
}

impl AppState {
    pub fn new(
        owner_service: Arc<BeneficialOwnerService>,
        profile: Profile,
        registry_endpoint: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            owner_service,
            profile: Arc::new(profile),
            registry_endpoint: registry_endpoint.into(),
        }
    }
}
