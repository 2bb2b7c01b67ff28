/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Credentials;
use crate::constants::{DEFAULT_MAX_SPAN_SECONDS, DEFAULT_PAGE_SIZE, HISTORY_DATE_FORMAT};
use chrono::NaiveDateTime;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize, Serializer};

/// Body of the `POST session` login call
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    identifier: &'a str,
    password: &'a str,
    encrypted_password: bool,
}

impl<'a> LoginRequest<'a> {
    /// Plain-text password login for the given credentials
    #[must_use]
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            identifier: &credentials.identifier,
            password: &credentials.password,
            encrypted_password: false,
        }
    }
}

/// Paging and time window shared by the history endpoints
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    /// Start of the window, omitted when unset
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_history_date"
    )]
    pub from: Option<NaiveDateTime>,
    /// End of the window, omitted when unset
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_history_date"
    )]
    pub to: Option<NaiveDateTime>,
    /// Maximum span of the window in seconds
    pub max_span_seconds: u32,
    /// Items per page
    pub page_size: u32,
    /// One-based page number
    pub page_number: u32,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            max_span_seconds: DEFAULT_MAX_SPAN_SECONDS,
            page_size: DEFAULT_PAGE_SIZE,
            page_number: 1,
        }
    }
}

impl HistoryQuery {
    /// Query with the default window and first page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start of the window
    #[must_use]
    pub fn from(mut self, from: NaiveDateTime) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the end of the window
    #[must_use]
    pub fn to(mut self, to: NaiveDateTime) -> Self {
        self.to = Some(to);
        self
    }

    /// Sets the maximum span in seconds
    #[must_use]
    pub fn max_span_seconds(mut self, seconds: u32) -> Self {
        self.max_span_seconds = seconds;
        self
    }

    /// Selects a page
    #[must_use]
    pub fn page(mut self, page_size: u32, page_number: u32) -> Self {
        self.page_size = page_size;
        self.page_number = page_number;
        self
    }
}

/// Kind of transactions returned by `history/transactions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Every transaction
    #[default]
    All,
    /// Deals only
    AllDeal,
    /// Deposits only
    Deposit,
    /// Withdrawals only
    Withdrawal,
}

/// Query of the `history/transactions` endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionQuery {
    /// Kind of transactions to return
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Window and paging
    #[serde(flatten)]
    pub history: HistoryQuery,
}

impl TransactionQuery {
    /// Query for the given kind of transactions with default paging
    #[must_use]
    pub fn new(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            history: HistoryQuery::default(),
        }
    }

    /// Replaces the window and paging
    #[must_use]
    pub fn with_history(mut self, history: HistoryQuery) -> Self {
        self.history = history;
        self
    }
}

fn serialize_history_date<S>(date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.collect_str(&date.format(HISTORY_DATE_FORMAT)),
        None => serializer.serialize_none(),
    }
}
