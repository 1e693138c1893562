//! Shared helpers for HTTP-level tests.

use stripe_sdk::StripeClient;
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

#[allow(dead_code)]
pub const API_KEY: &str = "sk_test_4eC39HqLyjWDarjtT1zdp7dc";

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, StripeClient) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let server = MockServer::start().await;
    let client = StripeClient::builder(API_KEY)
        .api_base(server.uri())
        .build()
        .unwrap();
    (server, client)
}
