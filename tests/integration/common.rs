// Common utilities for integration tests

use ig_session::prelude::*;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

pub const API_KEY: &str = "test-api-key";
pub const IDENTIFIER: &str = "test_user";
pub const PASSWORD: &str = "test_password";
pub const SECURITY_TOKEN: &str = "A";
pub const CST: &str = "B";

/// Configuration pointing at the mock server, with request pacing disabled
pub fn test_config(base_url: &str) -> Config {
    setup_logger();
    let mut config = Config::with_credentials(base_url, IDENTIFIER, PASSWORD, API_KEY);
    config.rate_limiter.period_seconds = 0;
    config
}

/// Mocks a successful `POST session` returning the test token pair
///
/// The mock only matches requests that carry no token headers yet.
pub async fn mock_login(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/session")
        .match_header("Version", "2")
        .match_header("X-IG-API-KEY", API_KEY)
        .match_header("Content-Type", "application/json; charset=utf-8")
        .match_header("Accept", "application/json; charset=utf-8")
        .match_header("X-SECURITY-TOKEN", Matcher::Missing)
        .match_header("CST", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "identifier": IDENTIFIER,
            "password": PASSWORD,
            "encryptedPassword": false
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_header("X-SECURITY-TOKEN", SECURITY_TOKEN)
        .with_header("CST", CST)
        .with_body(r#"{"accountType":"CFD","currentAccountId":"ABC123"}"#)
        .expect(1)
        .create_async()
        .await
}

/// Mocks the `DELETE session` logout call
pub async fn mock_logout(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("DELETE", "/session")
        .match_header("Version", "1")
        .match_header("X-SECURITY-TOKEN", SECURITY_TOKEN)
        .match_header("CST", CST)
        .with_status(204)
        .expect(hits)
        .create_async()
        .await
}

/// Connects a client against the mock server, which must have a login mock
pub async fn connect(server: &ServerGuard) -> SessionClient {
    SessionClient::connect(test_config(&server.url()))
        .await
        .expect("login against the mock server should succeed")
}
