/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Header composition for outgoing calls
//!
//! The header set is rebuilt for every request from the current session state;
//! nothing here is cached or has side effects.

use crate::constants::{
    API_KEY_HEADER, CST_HEADER, DEFAULT_CONTENT_TYPE, DEFAULT_ENCODING, SECURITY_TOKEN_HEADER,
    VERSION_HEADER,
};
use crate::session::state::SessionTokens;

/// Inputs of a single header composition
#[derive(Debug, Clone, Copy)]
pub struct HeaderContext<'a> {
    /// Application API key, sent on every call
    pub api_key: &'a str,
    /// API version requested by the caller
    pub version: u8,
    /// Content type override, `application/json` when `None`
    pub content_type: Option<&'a str>,
    /// Charset override, `utf-8` when `None`
    pub encoding: Option<&'a str>,
    /// Token pair of the active session, if any
    pub tokens: Option<&'a SessionTokens>,
}

/// Ordered list of `(name, value)` headers for one request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderSet {
    headers: Vec<(&'static str, String)>,
}

impl HeaderSet {
    fn push(&mut self, name: &'static str, value: String) {
        self.headers.push((name, value));
    }

    /// Value of a header, matched case-insensitively
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the header is part of the set
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of headers in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.headers.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

/// Builds the header set for one call
///
/// `Content-Type` and `Accept` share the `"<type>; charset=<encoding>"` value.
/// `X-SECURITY-TOKEN` and `CST` are emitted together and only when a token pair
/// is present.
///
/// # Example
/// ```
/// use ig_session::session::headers::{HeaderContext, compose_headers};
///
/// let headers = compose_headers(&HeaderContext {
///     api_key: "key",
///     version: 2,
///     content_type: None,
///     encoding: None,
///     tokens: None,
/// });
/// assert_eq!(headers.get("Accept"), Some("application/json; charset=utf-8"));
/// assert_eq!(headers.get("Version"), Some("2"));
/// assert!(!headers.contains("CST"));
/// ```
#[must_use]
pub fn compose_headers(ctx: &HeaderContext<'_>) -> HeaderSet {
    let media_type = format!(
        "{}; charset={}",
        ctx.content_type.unwrap_or(DEFAULT_CONTENT_TYPE),
        ctx.encoding.unwrap_or(DEFAULT_ENCODING)
    );

    let mut headers = HeaderSet::default();
    headers.push("Content-Type", media_type.clone());
    headers.push("Accept", media_type);
    headers.push(API_KEY_HEADER, ctx.api_key.to_string());
    headers.push(VERSION_HEADER, ctx.version.to_string());

    if let Some(tokens) = ctx.tokens {
        headers.push(SECURITY_TOKEN_HEADER, tokens.security_token().to_string());
        headers.push(CST_HEADER, tokens.cst().to_string());
    }

    headers
}
