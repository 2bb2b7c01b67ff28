use ig_session::application::config::{Config, RateLimiterConfig};

#[test]
fn test_with_credentials() {
    let config = Config::with_credentials("https://api.example.com", "user", "secret", "key");

    assert_eq!(config.rest_api.base_url, "https://api.example.com");
    assert_eq!(config.rest_api.timeout, 30);
    assert_eq!(config.credentials.identifier, "user");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(config.credentials.api_key, "key");
    assert_eq!(config.rate_limiter, RateLimiterConfig::default());
}

#[test]
fn test_display_does_not_leak_secrets() {
    let config = Config::with_credentials(
        "https://api.example.com",
        "user",
        "very-secret-password",
        "very-secret-key",
    );

    let display = config.to_string();
    let debug = format!("{config:?}");

    assert!(display.contains("user"));
    for rendered in [display, debug] {
        assert!(!rendered.contains("very-secret-password"));
        assert!(!rendered.contains("very-secret-key"));
    }
}

#[test]
fn test_deserialize_with_secrets() {
    let config: Config = serde_json::from_str(
        r#"{
            "credentials": {"identifier": "user", "password": "pw", "api_key": "key"},
            "rest_api": {"base_url": "https://api.example.com", "timeout": 0},
            "rate_limiter": {"max_requests": 60, "period_seconds": 60, "burst_size": 5}
        }"#,
    )
    .unwrap();

    assert_eq!(config.credentials.password, "pw");
    assert_eq!(config.credentials.api_key, "key");
    assert_eq!(config.rest_api.timeout, 0);
    assert_eq!(config.rate_limiter.burst_size, 5);
}
