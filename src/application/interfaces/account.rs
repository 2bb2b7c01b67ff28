use crate::error::AppError;
use crate::model::requests::{HistoryQuery, TransactionQuery};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets information about all user accounts (`GET accounts`)
    async fn get_accounts(&self) -> Result<Value, AppError>;

    /// Gets account activity for a time window (`GET history/activity`, version 2)
    ///
    /// # Arguments
    /// * `query` - Window and paging, `from`/`to` omitted when unset
    async fn get_history_activity(&self, query: &HistoryQuery) -> Result<Value, AppError>;

    /// Gets the transaction history for a time window (`GET history/transactions`, version 2)
    ///
    /// # Arguments
    /// * `query` - Transaction kind plus window and paging
    async fn get_history_transactions(&self, query: &TransactionQuery)
    -> Result<Value, AppError>;

    /// Gets the open positions of the active account (`GET positions`, version 2)
    async fn get_positions(&self) -> Result<Value, AppError>;
}
