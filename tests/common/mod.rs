#![allow(dead_code)]

use async_trait::async_trait;
use crbr_gateway::application::services::BeneficialOwnerService;
use crbr_gateway::domain::transport::{RegistryTransport, UpstreamOutcome};
use crbr_gateway::state::{AppState, Profile};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const VALID_NIP: &str = "1234563218";

pub const TWO_FILINGS: &str = include_str!("../fixtures/two_filings.xml");
pub const NO_OWNERS: &str = include_str!("../fixtures/no_owners.xml");
pub const CLIENT_FAULT: &str = include_str!("../fixtures/client_fault.xml");
pub const SERVER_FAULT: &str = include_str!("../fixtures/server_fault.xml");

/// Transport returning a fixed outcome and counting calls.
pub struct StubTransport {
    outcome: UpstreamOutcome,
    calls: AtomicUsize,
}

impl StubTransport {
    pub fn new(outcome: UpstreamOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistryTransport for StubTransport {
    async fn fetch(&self, _nip: &str) -> UpstreamOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

pub fn create_test_state(transport: Arc<StubTransport>) -> AppState {
    let owner_service = Arc::new(BeneficialOwnerService::new(transport));

    let profile = Profile {
        first_name: "Jan".to_string(),
        last_name: "Testowy".to_string(),
    };

    AppState::new(owner_service, profile, "http://localhost:9000/crbr")
}
