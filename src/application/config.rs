use crate::constants::DEFAULT_BASE_URL;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the IG Markets API
///
/// Password and API key are never serialized, so printing a configuration
/// does not leak them.
pub struct Credentials {
    /// Login identifier (username) of the IG account
    pub identifier: String,
    /// Password of the IG account
    #[serde(skip_serializing, default)]
    pub password: String,
    /// API key of the IG application
    #[serde(skip_serializing, default)]
    pub api_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the session client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Client-side pacing of outgoing requests
    pub rate_limiter: RateLimiterConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every request path is joined to
    pub base_url: String,
    /// Timeout in seconds for a single request, `0` disables it
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: 30,
            period_seconds: 60,
            burst_size: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds a configuration from the environment, loading `.env` first
    ///
    /// Reads `IG_USERNAME`, `IG_PASSWORD`, `IG_API_KEY`, `IG_REST_BASE_URL`,
    /// `IG_REST_TIMEOUT` and the `IG_RATE_LIMIT_*` family. Missing credentials
    /// are reported with `error!`; the login call will then be rejected by the
    /// server.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let identifier = get_env_or_default("IG_USERNAME", String::new());
        let password = get_env_or_default("IG_PASSWORD", String::new());
        let api_key = get_env_or_default("IG_API_KEY", String::new());

        if identifier.is_empty() {
            error!("IG_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("IG_PASSWORD not found in environment variables or .env file");
        }
        if api_key.is_empty() {
            error!("IG_API_KEY not found in environment variables or .env file");
        }

        let limits = RateLimiterConfig::default();

        Config {
            credentials: Credentials {
                identifier,
                password,
                api_key,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("IG_REST_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("IG_REST_TIMEOUT", 30),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("IG_RATE_LIMIT_MAX_REQUESTS", limits.max_requests),
                period_seconds: get_env_or_default(
                    "IG_RATE_LIMIT_PERIOD_SECONDS",
                    limits.period_seconds,
                ),
                burst_size: get_env_or_default("IG_RATE_LIMIT_BURST_SIZE", limits.burst_size),
            },
        }
    }

    /// Builds a configuration from explicit values, without touching the environment
    ///
    /// # Example
    /// ```
    /// use ig_session::application::config::Config;
    ///
    /// let config = Config::with_credentials(
    ///     "https://demo-api.ig.com/gateway/deal",
    ///     "user",
    ///     "secret",
    ///     "api-key",
    /// );
    /// assert_eq!(config.rest_api.base_url, "https://demo-api.ig.com/gateway/deal");
    /// ```
    pub fn with_credentials(
        base_url: impl Into<String>,
        identifier: impl Into<String>,
        password: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                identifier: identifier.into(),
                password: password.into(),
                api_key: api_key.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: 30,
            },
            rate_limiter: RateLimiterConfig::default(),
        }
    }
}
