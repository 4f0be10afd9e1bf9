mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use crbr_gateway::api::handlers::me_handler;
use crbr_gateway::domain::transport::UpstreamOutcome;
use serde_json::json;

#[tokio::test]
async fn test_me_returns_profile() {
    let transport = common::StubTransport::new(UpstreamOutcome::ClientFault);
    let app = Router::new()
        .route("/me", get(me_handler))
        .with_state(common::create_test_state(transport.clone()));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/me").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({"firstName": "Jan", "lastName": "Testowy"})
    );
    assert_eq!(transport.calls(), 0);
}
