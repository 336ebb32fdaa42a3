// Shared helpers for the unit tests

use api_session_client::prelude::*;
use mockito::{Matcher, Mock, ServerGuard};

/// Path probed by `login`
pub const PROBE_PATH: &str = "/posts/1";

/// Builds a client pointing at the mock server
pub fn client_for(server: &ServerGuard) -> SessionClient {
    SessionClient::new(Config::new().with_base_url(server.url()).with_timeout(5))
}

/// Registers a healthy probe endpoint expected to be hit `hits` times
pub async fn mock_probe(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("GET", PROBE_PATH)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"userId": 1, "id": 1, "title": "probe"}"#)
        .expect(hits)
        .create_async()
        .await
}

/// Creates a client and logs it in against a healthy probe
pub async fn logged_in_client(server: &mut ServerGuard) -> SessionClient {
    mock_probe(server, 1).await;
    let mut client = client_for(server);
    client.login().await.expect("login should succeed");
    client
}

/// The `Authorization` header value the client is expected to send
pub fn bearer_of(client: &SessionClient) -> String {
    let token = client.session().expect("client should be logged in").token();
    format!("Bearer {token}")
}
