/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for copper-client tests

use copper_client::CopperConfig;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_SECRET_KEY: &str = "test-secret-key";
pub const TEST_PORTFOLIO_ID: &str = "portfolio-1";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client configuration pointing at `base_url`
pub fn test_config(base_url: &str) -> CopperConfig {
    CopperConfig {
        api_key: TEST_API_KEY.to_string(),
        secret_key: TEST_SECRET_KEY.into(),
        base_url: base_url.to_string(),
        portfolio_id: TEST_PORTFOLIO_ID.to_string(),
        ..CopperConfig::default()
    }
}

/// Header value of a request captured by the mock server
#[allow(dead_code)]
pub fn header_value(request: &wiremock::Request, name: &str) -> String {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
