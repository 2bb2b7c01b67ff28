/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the IG session client
//!
//! Every public operation returns [`AppError`]. Failures raised while logging in
//! are wrapped in [`AuthError`] so callers can tell a rejected login apart from a
//! rejected authenticated call.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure raised by the login sequence
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server answered the login request with a non-2xx status
    #[error("login rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// The login request succeeded but one of the session token headers was missing
    #[error("login response is missing the {0} header")]
    MissingToken(&'static str),

    /// The login request never got an answer
    #[error("login transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested HTTP verb is not one the dispatcher supports
    #[error("operation \"{verb}\" is not allowed, please use one of \"{allowed}\"")]
    InvalidOperation {
        /// The verb that was rejected
        verb: String,
        /// Comma separated list of accepted verbs
        allowed: String,
    },

    /// An endpoint method received malformed input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Authentication against the session resource failed
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Any non-2xx answer to an authenticated call
    #[error("unexpected status {status}: {body}")]
    HttpStatus {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// Transport level failure (DNS, connection, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Status code carried by the error, if the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::HttpStatus { status, .. } => Some(*status),
            AppError::Auth(AuthError::Rejected { status, .. }) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Turns a failure of the generic dispatcher into a login failure
    pub(crate) fn into_auth(self) -> AppError {
        match self {
            AppError::HttpStatus { status, body } => AuthError::Rejected { status, body }.into(),
            AppError::Network(e) => AuthError::Transport(e).into(),
            other => other,
        }
    }
}
