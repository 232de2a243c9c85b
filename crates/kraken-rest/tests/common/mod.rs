//! Shared fixtures for kraken-rest integration tests

use kraken_auth::CounterNonce;
use kraken_rest::{ClientConfig, KrakenClient};
use std::time::Duration;
use wiremock::MockServer;

/// API key used by every test client
pub const TEST_KEY: &str = "test-api-key";

/// Secret from Kraken's REST authentication docs
pub const DOC_SECRET: &str =
    "kQH5HW/8p1uGOVjbgWA7FunAmGO8lsSUXNsu3eow76sz84Q18fWxnyRzBHCd3pd5nE9qa99HAZtuZuj6F1huXg==";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Config pointed at the mock server with a deterministic nonce
pub fn test_config(server: &MockServer, first_nonce: u64) -> ClientConfig {
    ClientConfig::new(TEST_KEY, DOC_SECRET)
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(2))
        .with_nonce_source(CounterNonce::starting_at(first_nonce))
}

/// Client pointed at the mock server
pub fn test_client(server: &MockServer) -> KrakenClient {
    KrakenClient::new(test_config(server, 1)).expect("valid test config")
}
