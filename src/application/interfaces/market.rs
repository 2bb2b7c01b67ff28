use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the market service
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets a node of the market navigation hierarchy
    ///
    /// Without a node id the top-level categories are returned
    /// (`GET marketnavigation`), otherwise `GET marketnavigation/{node_id}`.
    async fn get_market_categories(&self, node_id: Option<&str>) -> Result<Value, AppError>;

    /// Gets details of a single market (`GET markets/{epic}`, version 3)
    async fn get_market_detail(&self, epic: &str) -> Result<Value, AppError>;

    /// Gets details of several markets in one call (`GET markets?epics=a,b`, version 2)
    ///
    /// # Arguments
    /// * `epics` - Between 1 and 50 EPICs
    async fn get_market_details(&self, epics: &[String]) -> Result<Value, AppError>;

    /// Searches markets by search term (`GET markets?searchTerm=...`)
    async fn find_market(&self, search_term: &str) -> Result<Value, AppError>;
}
