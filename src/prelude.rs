/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Prelude
//!
//! Brings the session client, its configuration, the endpoint traits and the
//! error type into scope with a single import.
//!
//! ```rust
//! use ig_session::prelude::*;
//!
//! let config = Config::with_credentials("https://demo-api.ig.com/gateway/deal", "user", "pw", "key");
//! assert_eq!(config.credentials.identifier, "user");
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AppError, AuthError};

// ============================================================================
// SESSION
// ============================================================================

pub use crate::session::client::SessionClient;
pub use crate::session::headers::{HeaderContext, HeaderSet, compose_headers};
pub use crate::session::state::{SessionStatus, SessionTokens};

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

pub use crate::model::http::{ApiRequest, ApiResponse, Verb, build_url};
pub use crate::model::requests::{HistoryQuery, TransactionQuery, TransactionType};

// ============================================================================
// ENDPOINT SERVICES
// ============================================================================

pub use crate::application::services::{AccountService, GeneralService, MarketService};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::application::rate_limiter::RateLimiter;
pub use crate::constants::*;
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use reqwest::{Method, StatusCode};
pub use serde_json::Value;
pub use tracing::{debug, error, info, warn};
