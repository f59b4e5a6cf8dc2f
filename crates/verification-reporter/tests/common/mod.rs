use httpmock::MockServer;
use pact_model::{
    BrokerUrlSource,
    PUBLISH_VERIFICATION_RESULTS_LINK,
    Pact,
    PactAttributes,
    PactSource,
};
use std::net::TcpListener;

pub const RESULTS_PATH: &str =
    "/pacts/provider/orders-api/consumer/web-app/pact-version/0f1e2d/verification-results";

pub fn try_start_mock_server() -> MockServer {
    TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("Failed to bind localhost for httpmock: {err}"))
        .and_then(|listener| {
            drop(listener);
            std::panic::catch_unwind(MockServer::start).map_err(|err| {
                if let Some(msg) = err.downcast_ref::<&str>() {
                    (*msg).to_string()
                } else if let Some(msg) = err.downcast_ref::<String>() {
                    msg.clone()
                } else {
                    "MockServer::start() panicked".to_string()
                }
            })
        })
        .expect("Failed to start httpmock server")
}

/// A pact as it looks after being fetched from the mock broker.
pub fn broker_pact(server: &MockServer) -> Pact {
    let attributes = PactAttributes::new()
        .with_link(PUBLISH_VERIFICATION_RESULTS_LINK, server.url(RESULTS_PATH));
    Pact::new(
        "web-app",
        "orders-api",
        PactSource::BrokerUrl(
            BrokerUrlSource::new(
                server.url("/pacts/provider/orders-api/consumer/web-app/latest"),
                server.base_url(),
            )
            .with_attributes(attributes),
        ),
    )
}
