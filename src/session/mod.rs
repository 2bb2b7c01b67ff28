/// Session client: login, logout and the generic request dispatcher
pub mod client;
/// Header composition for outgoing calls
pub mod headers;
/// Session token pair and authentication state
pub mod state;

pub use client::SessionClient;
pub use headers::{HeaderContext, HeaderSet, compose_headers};
pub use state::{SessionStatus, SessionTokens};
