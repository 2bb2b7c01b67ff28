use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for session and application housekeeping endpoints
#[async_trait]
pub trait GeneralService: Send + Sync {
    /// Gets the key used to encrypt passwords (`GET session/encryptionKey`)
    async fn get_encryption_key(&self) -> Result<Value, AppError>;

    /// Lists the client applications of the account (`GET operations/application`)
    async fn get_applications(&self) -> Result<Value, AppError>;

    /// Disables the API key of the current application (`PUT operations/application/disable`)
    ///
    /// The session stays logged in locally; the logout at the end of the
    /// scope may then be rejected by the server, which teardown tolerates.
    async fn disable_current_application(&self) -> Result<Value, AppError>;
}
