/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session client for the IG Markets REST API
//!
//! The client owns the credentials and the session token pair. Every call,
//! login and logout included, goes through [`SessionClient::request`], which
//! validates the verb, joins the URL, composes the headers from the current
//! session state and dispatches the HTTP call.
//!
//! # Example
//! ```ignore
//! use ig_session::prelude::*;
//!
//! let accounts = SessionClient::scoped(Config::new(), async |client: &SessionClient| {
//!     client.get_accounts().await
//! })
//! .await?;
//! ```

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{
    CST_HEADER, LOGIN_API_VERSION, SECURITY_TOKEN_HEADER, SESSION_PATH, USER_AGENT,
};
use crate::error::{AppError, AuthError};
use crate::model::http::{ApiRequest, ApiResponse, Verb, build_url, send_request};
use crate::model::requests::LoginRequest;
use crate::session::headers::{HeaderContext, HeaderSet, compose_headers};
use crate::session::state::{SessionState, SessionStatus, SessionTokens};
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Authenticated client bound to one base URL and one set of credentials
///
/// Construction logs in; [`SessionClient::close`] (or [`SessionClient::scoped`])
/// logs out. The client is `Send + Sync` and can be shared behind an `Arc`:
/// login and logout are serialized and requests always see a complete token
/// pair.
pub struct SessionClient {
    config: Arc<Config>,
    http_client: HttpClient,
    rate_limiter: RateLimiter,
    state: SessionState,
}

impl SessionClient {
    /// Creates a new client and performs the initial login
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(SessionClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If the login fails; no client is returned
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::unauthenticated(config)?;
        client.login().await?;
        Ok(client)
    }

    /// Connects, runs `body` with the client, then always logs out
    ///
    /// A logout failure at the end of the scope is logged and dropped; the
    /// result of `body` is returned as is. When `body` panics the session is
    /// closed before the panic resumes. When the returned future is dropped
    /// before completion (a timeout or a `select!`), the logout is spawned on
    /// the current tokio runtime.
    ///
    /// # Example
    /// ```ignore
    /// let positions = SessionClient::scoped(config, async |client: &SessionClient| {
    ///     client.get_positions().await
    /// })
    /// .await?;
    /// ```
    pub async fn scoped<T, F>(config: Config, body: F) -> Result<T, AppError>
    where
        F: AsyncFnOnce(&SessionClient) -> Result<T, AppError>,
    {
        let client = Arc::new(Self::connect(config).await?);
        let mut guard = ScopeGuard::new(Arc::clone(&client));

        let outcome = AssertUnwindSafe(body(&*client)).catch_unwind().await;
        client.close().await;
        guard.disarm();

        match outcome {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    fn unauthenticated(config: Config) -> Result<Self, AppError> {
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if config.rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.rest_api.timeout));
        }
        let http_client = builder.build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        Ok(Self {
            config: Arc::new(config),
            http_client,
            rate_limiter,
            state: SessionState::new(),
        })
    }

    /// Logs in and stores the token pair from the response headers
    ///
    /// Sends `POST session` (version 2). Any failure is reported as
    /// [`AppError::Auth`] and leaves the stored session untouched.
    pub async fn login(&self) -> Result<(), AppError> {
        let _transition = self.state.begin_transition().await;

        info!("Logging in as {}", self.config.credentials.identifier);

        let request = ApiRequest::post(SESSION_PATH)
            .version(LOGIN_API_VERSION)
            .params(&LoginRequest::new(&self.config.credentials))?;

        let response = self.request(request).await.map_err(AppError::into_auth)?;
        let tokens = extract_tokens(&response)?;
        self.state.set(tokens).await;

        info!("✓ Login successful");
        Ok(())
    }

    /// Invalidates the session server-side and forgets the token pair
    ///
    /// Does nothing when no session is active. The token pair is cleared even
    /// when the `DELETE session` call fails; that failure is still returned.
    pub async fn logout(&self) -> Result<(), AppError> {
        let _transition = self.state.begin_transition().await;

        if self.state.status().await == SessionStatus::Unauthenticated {
            debug!("No active session, skipping logout");
            return Ok(());
        }

        info!("Logging out");
        let result = self.request(ApiRequest::delete(SESSION_PATH)).await;
        self.state.clear().await;

        result.map(|_| info!("✓ Logged out successfully"))
    }

    /// Logs out, reporting a failure with `warn!` instead of returning it
    ///
    /// Meant for the end of a scope, where a logout error must not hide the
    /// reason the scope is ending.
    pub async fn close(&self) {
        if let Err(e) = self.logout().await {
            warn!("Logout during teardown failed: {}", e);
        }
    }

    /// Dispatches one call
    ///
    /// Fails with [`AppError::InvalidOperation`] before any network activity
    /// when the method is not `GET`, `PUT`, `POST` or `DELETE`, and with
    /// [`AppError::HttpStatus`] on any non-2xx answer.
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let verb = Verb::try_from(&request.method)?;
        let url = build_url(&self.config.rest_api.base_url, &request.path);
        let headers = self.headers_for(&request).await;

        send_request(
            &self.http_client,
            &self.rate_limiter,
            verb,
            &url,
            &headers,
            request.params.as_ref(),
        )
        .await
    }

    /// Makes a GET request and decodes the JSON answer
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        version: Option<u8>,
    ) -> Result<T, AppError> {
        self.request_json(ApiRequest::get(path), version).await
    }

    /// Makes a POST request with a JSON body and decodes the JSON answer
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        version: Option<u8>,
    ) -> Result<T, AppError> {
        self.request_json(ApiRequest::post(path).params(body)?, version)
            .await
    }

    /// Makes a PUT request with a JSON body and decodes the JSON answer
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        version: Option<u8>,
    ) -> Result<T, AppError> {
        self.request_json(ApiRequest::put(path).params(body)?, version)
            .await
    }

    /// Makes a DELETE request and decodes the JSON answer
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        version: Option<u8>,
    ) -> Result<T, AppError> {
        self.request_json(ApiRequest::delete(path), version).await
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        version: Option<u8>,
    ) -> Result<T, AppError> {
        let request = match version {
            Some(v) => request.version(v),
            None => request,
        };
        self.request(request).await?.json()
    }

    /// Header set the next call described by `request` would carry
    pub async fn headers_for(&self, request: &ApiRequest) -> HeaderSet {
        let tokens = self.state.tokens().await;
        compose_headers(&HeaderContext {
            api_key: &self.config.credentials.api_key,
            version: request.version,
            content_type: request.content_type.as_deref(),
            encoding: request.encoding.as_deref(),
            tokens: tokens.as_ref(),
        })
    }

    /// Current authentication state
    pub async fn status(&self) -> SessionStatus {
        self.state.status().await
    }

    /// Whether a token pair is held
    pub async fn is_logged_in(&self) -> bool {
        self.status().await == SessionStatus::Authenticated
    }

    /// Copy of the current token pair
    pub async fn session_tokens(&self) -> Option<SessionTokens> {
        self.state.tokens().await
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("identifier", &self.config.credentials.identifier)
            .field("rate_limiter", &self.rate_limiter)
            .finish_non_exhaustive()
    }
}

/// Logs out a scoped client whose scope was dropped before it could close
struct ScopeGuard {
    client: Option<Arc<SessionClient>>,
}

impl ScopeGuard {
    fn new(client: Arc<SessionClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    fn disarm(&mut self) {
        self.client = None;
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let Some(client) = self.client.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                warn!("Session scope dropped before completion, logging out in the background");
                handle.spawn(async move { client.close().await });
            }
            Err(_) => warn!("Session scope dropped outside a tokio runtime, logout skipped"),
        }
    }
}

fn extract_tokens(response: &ApiResponse) -> Result<SessionTokens, AppError> {
    let security_token = response
        .header(SECURITY_TOKEN_HEADER)
        .ok_or(AuthError::MissingToken(SECURITY_TOKEN_HEADER))?;
    let cst = response
        .header(CST_HEADER)
        .ok_or(AuthError::MissingToken(CST_HEADER))?;
    Ok(SessionTokens::new(security_token, cst))
}
