/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # ig-session
//!
//! Session manager and request dispatcher for the IG Markets REST trading API.
//!
//! A [`SessionClient`](session::client::SessionClient) logs in on construction,
//! keeps the `X-SECURITY-TOKEN` / `CST` pair returned by the server, and routes
//! every call through one generic request primitive that adds the API key,
//! the version header, content negotiation and, once logged in, the token pair.
//!
//! ```ignore
//! use ig_session::prelude::*;
//!
//! setup_logger();
//! let config = Config::with_credentials(
//!     "https://demo-api.ig.com/gateway/deal",
//!     "user",
//!     "password",
//!     "api-key",
//! );
//!
//! let detail = SessionClient::scoped(config, async |client: &SessionClient| {
//!     client.get_market_detail("CS.D.EURUSD.CFD.IP").await
//! })
//! .await?;
//! ```

/// Configuration, rate limiting and endpoint services
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request descriptor, raw response and request models
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Session client, header composition and session state
pub mod session;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
