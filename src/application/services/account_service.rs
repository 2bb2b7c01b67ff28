/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::interfaces::account::AccountService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::requests::{HistoryQuery, TransactionQuery};
use crate::session::client::SessionClient;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl AccountService for SessionClient {
    async fn get_accounts(&self) -> Result<Value, AppError> {
        info!("Getting account information");
        let result = self.request(ApiRequest::get("accounts")).await?.json()?;
        debug!("Account information obtained");
        Ok(result)
    }

    async fn get_history_activity(&self, query: &HistoryQuery) -> Result<Value, AppError> {
        info!("Getting account activity");
        let request = ApiRequest::get("history/activity").version(2).params(query)?;
        self.request(request).await?.json()
    }

    async fn get_history_transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<Value, AppError> {
        info!(
            "Getting transaction history of type {:?}",
            query.transaction_type
        );
        let request = ApiRequest::get("history/transactions")
            .version(2)
            .params(query)?;
        self.request(request).await?.json()
    }

    async fn get_positions(&self) -> Result<Value, AppError> {
        debug!("Getting open positions");
        self.request(ApiRequest::get("positions").version(2))
            .await?
            .json()
    }
}
