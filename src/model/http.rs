/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! HTTP plumbing shared by every call
//!
//! [`Verb`] is the closed set of supported methods, [`ApiRequest`] describes
//! one call and [`send_request`] performs it, placing parameters in the query
//! string for `GET` and in a JSON body for `PUT` and `POST`.

use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use crate::session::headers::HeaderSet;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

/// HTTP verbs the dispatcher accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Parameters are sent as a query string
    Get,
    /// Parameters are sent as a JSON body
    Put,
    /// Parameters are sent as a JSON body
    Post,
    /// No parameters are sent
    Delete,
}

impl Verb {
    /// Every supported verb, in the order used by error messages
    pub const ALL: [Verb; 4] = [Verb::Get, Verb::Put, Verb::Post, Verb::Delete];

    /// Upper-case name of the verb
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Put => "PUT",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        }
    }

    /// Matching `reqwest` method
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Put => Method::PUT,
            Verb::Post => Method::POST,
            Verb::Delete => Method::DELETE,
        }
    }

    fn rejected(verb: &str) -> AppError {
        AppError::InvalidOperation {
            verb: verb.to_string(),
            allowed: Verb::ALL.map(Verb::as_str).join(", "),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Verb::rejected(s))
    }
}

impl TryFrom<&Method> for Verb {
    type Error = AppError;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.method() == *method)
            .ok_or_else(|| Verb::rejected(method.as_str()))
    }
}

/// Description of one call to the API, consumed by the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method, validated against [`Verb`] at dispatch time
    pub method: Method,
    /// Path relative to the base URL
    pub path: String,
    /// Parameters, placed according to the verb
    pub params: Option<Value>,
    /// Value of the `Version` header
    pub version: u8,
    /// Content type override
    pub content_type: Option<String>,
    /// Charset override
    pub encoding: Option<String>,
}

impl ApiRequest {
    /// Creates a version 1 request without parameters
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: None,
            version: crate::constants::DEFAULT_API_VERSION,
            content_type: None,
            encoding: None,
        }
    }

    /// `GET` request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST` request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// `PUT` request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// `DELETE` request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sets the API version
    #[must_use]
    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Serializes `params` and attaches them to the request
    pub fn params<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self, AppError> {
        self.params = Some(serde_json::to_value(params)?);
        Ok(self)
    }

    /// Attaches already serialized parameters
    #[must_use]
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Overrides the content type of `Content-Type` and `Accept`
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Overrides the charset of `Content-Type` and `Accept`
    #[must_use]
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }
}

/// A successful (2xx) answer, handed back undecoded
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub body: String,
}

impl ApiResponse {
    /// Value of a response header, if present and valid UTF-8
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Decodes the body as JSON
    ///
    /// An empty body decodes as JSON `null`, which lets `DELETE`/`PUT` answers
    /// without content be read as [`Value`].
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        let body = if self.body.trim().is_empty() {
            "null"
        } else {
            self.body.as_str()
        };
        Ok(serde_json::from_str(body)?)
    }
}

/// Joins the base URL and a relative path with exactly one `/`
///
/// # Example
/// ```
/// use ig_session::model::http::build_url;
///
/// assert_eq!(build_url("https://api.example.com", "session"), "https://api.example.com/session");
/// assert_eq!(build_url("https://api.example.com/", "/session"), "https://api.example.com/session");
/// ```
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Flattens a JSON object into query pairs
///
/// `null` members are skipped, strings are sent verbatim and every other value
/// uses its JSON text.
pub fn query_pairs(params: &Value) -> Result<Vec<(String, String)>, AppError> {
    let Value::Object(map) = params else {
        return Err(AppError::InvalidInput(
            "query parameters must be a JSON object".to_string(),
        ));
    };

    Ok(map
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect())
}

/// Sends one request and checks its status
///
/// `GET` carries `params` as a query string, `PUT` and `POST` as a JSON body,
/// `DELETE` carries nothing. Any non-2xx status becomes
/// [`AppError::HttpStatus`]; nothing is retried.
///
/// # Arguments
/// * `client` - HTTP client to send with
/// * `rate_limiter` - Pacing applied before the request leaves
/// * `verb` - Validated verb
/// * `url` - Absolute URL
/// * `headers` - Header set composed for this call
/// * `params` - Optional parameters
pub async fn send_request(
    client: &Client,
    rate_limiter: &RateLimiter,
    verb: Verb,
    url: &str,
    headers: &HeaderSet,
    params: Option<&Value>,
) -> Result<ApiResponse, AppError> {
    let query = match (verb, params) {
        (Verb::Get, Some(p)) => Some(query_pairs(p)?),
        _ => None,
    };

    rate_limiter.wait().await;

    debug!("{} {}", verb, url);

    let mut request = client.request(verb.method(), url);

    for (name, value) in headers.iter() {
        request = request.header(name, value);
    }

    request = match verb {
        Verb::Get => match &query {
            Some(pairs) => request.query(pairs),
            None => request,
        },
        Verb::Put | Verb::Post => match params {
            Some(body) => request.json(body),
            None => request,
        },
        Verb::Delete => request,
    };

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let response_headers = response.headers().clone();
    let body = response.text().await?;

    if !status.is_success() {
        error!("Request failed with status {}: {}", status, body);
        return Err(AppError::HttpStatus { status, body });
    }

    Ok(ApiResponse {
        status,
        headers: response_headers,
        body,
    })
}
