/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::interfaces::general::GeneralService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::session::client::SessionClient;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

#[async_trait]
impl GeneralService for SessionClient {
    async fn get_encryption_key(&self) -> Result<Value, AppError> {
        self.request(ApiRequest::get("session/encryptionKey"))
            .await?
            .json()
    }

    async fn get_applications(&self) -> Result<Value, AppError> {
        info!("Getting client applications");
        self.request(ApiRequest::get("operations/application"))
            .await?
            .json()
    }

    async fn disable_current_application(&self) -> Result<Value, AppError> {
        warn!("Disabling the API key of the current application");
        self.request(ApiRequest::put("operations/application/disable"))
            .await?
            .json()
    }
}
