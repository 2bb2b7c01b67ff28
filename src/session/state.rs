/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication state held by a session client
//!
//! The token pair lives behind an `RwLock` as an `Option`, so readers see
//! either both tokens or none. Login and logout take a separate transition
//! lock and never overlap.

use std::fmt;
use tokio::sync::{Mutex, MutexGuard, RwLock};

/// The `X-SECURITY-TOKEN` / `CST` pair issued by a successful login
///
/// Both values always travel together: a session either holds the whole
/// pair or nothing.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionTokens {
    security_token: String,
    cst: String,
}

impl SessionTokens {
    /// Creates a token pair
    pub fn new(security_token: impl Into<String>, cst: impl Into<String>) -> Self {
        Self {
            security_token: security_token.into(),
            cst: cst.into(),
        }
    }

    /// Value of the `X-SECURITY-TOKEN` header
    #[must_use]
    pub fn security_token(&self) -> &str {
        &self.security_token
    }

    /// Value of the `CST` header
    #[must_use]
    pub fn cst(&self) -> &str {
        &self.cst
    }
}

impl fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokens")
            .field("security_token", &"***")
            .field("cst", &"***")
            .finish()
    }
}

/// Authentication state of a session client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No token pair is held
    Unauthenticated,
    /// A token pair from a successful login is held
    Authenticated,
}

/// Holder of the current token pair
///
/// Reads take a snapshot of the whole pair. Login and logout hold the
/// transition lock for their full sequence so they never interleave.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    tokens: RwLock<Option<SessionTokens>>,
    transition: Mutex<()>,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Copy of the current pair
    pub(crate) async fn tokens(&self) -> Option<SessionTokens> {
        self.tokens.read().await.clone()
    }

    pub(crate) async fn status(&self) -> SessionStatus {
        if self.tokens.read().await.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }

    /// Serializes login and logout sequences
    pub(crate) async fn begin_transition(&self) -> MutexGuard<'_, ()> {
        self.transition.lock().await
    }

    pub(crate) async fn set(&self, tokens: SessionTokens) {
        *self.tokens.write().await = Some(tokens);
    }

    /// Clears the pair, returning whether one was held
    pub(crate) async fn clear(&self) -> bool {
        self.tokens.write().await.take().is_some()
    }
}
