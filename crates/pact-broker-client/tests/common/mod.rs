use httpmock::MockServer;
use pact_model::{
    PUBLISH_VERIFICATION_RESULTS_LINK,
    PactAttributes,
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

/// Attributes as the broker would attach them to a fetched pact.
pub fn pact_attributes(server: &MockServer) -> PactAttributes {
    PactAttributes::new()
        .with_link("self", server.url("/pacts/provider/orders-api/consumer/web-app/latest"))
        .with_link(PUBLISH_VERIFICATION_RESULTS_LINK, server.url(RESULTS_PATH))
}

/// Returns a base URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
