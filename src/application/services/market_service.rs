/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::interfaces::market::MarketService;
use crate::constants::MAX_EPICS_PER_REQUEST;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::session::client::SessionClient;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info};

#[async_trait]
impl MarketService for SessionClient {
    async fn get_market_categories(&self, node_id: Option<&str>) -> Result<Value, AppError> {
        let path = match node_id {
            Some(id) => {
                validate_path_segment("node id", id)?;
                format!("marketnavigation/{id}")
            }
            None => "marketnavigation".to_string(),
        };
        debug!("Getting market navigation: {}", path);
        self.request(ApiRequest::get(path)).await?.json()
    }

    async fn get_market_detail(&self, epic: &str) -> Result<Value, AppError> {
        validate_epic(epic)?;
        info!("Getting market details: {}", epic);
        let result = self
            .request(ApiRequest::get(format!("markets/{epic}")).version(3))
            .await?
            .json()?;
        debug!("Market details obtained for: {}", epic);
        Ok(result)
    }

    async fn get_market_details(&self, epics: &[String]) -> Result<Value, AppError> {
        if epics.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one EPIC is required".to_string(),
            ));
        }
        if epics.len() > MAX_EPICS_PER_REQUEST {
            return Err(AppError::InvalidInput(format!(
                "too many EPICs provided: {}, the maximum number of EPICs is {}",
                epics.len(),
                MAX_EPICS_PER_REQUEST
            )));
        }
        for epic in epics {
            validate_epic(epic)?;
        }

        let joined = epics.join(",");
        info!("Getting market details for {} EPICs", epics.len());
        self.request(ApiRequest::get(format!("markets?epics={joined}")).version(2))
            .await?
            .json()
    }

    async fn find_market(&self, search_term: &str) -> Result<Value, AppError> {
        if search_term.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "search term must not be empty".to_string(),
            ));
        }
        info!("Searching markets: {}", search_term);
        let request = ApiRequest::get("markets").with_params(json!({ "searchTerm": search_term }));
        self.request(request).await?.json()
    }
}

fn validate_epic(epic: &str) -> Result<(), AppError> {
    validate_path_segment("EPIC", epic)
}

/// Checks that `value` can be placed verbatim as one URL path segment
///
/// EPICs and navigation node ids only use ASCII letters, digits, `.`, `_`
/// and `-`. Anything else (`/`, `#`, `?`, `,`, spaces) and the `.` / `..`
/// segments would make the call hit another resource.
fn validate_path_segment(kind: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{kind} must not be empty")));
    }
    let valid = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !valid || value == "." || value == ".." {
        return Err(AppError::InvalidInput(format!(
            "invalid {kind} \"{value}\": only ASCII letters, digits, '.', '_' and '-' are allowed"
        )));
    }
    Ok(())
}
