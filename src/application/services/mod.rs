/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Account endpoints implemented on the session client
pub mod account_service;
/// Session and application housekeeping endpoints implemented on the session client
pub mod general_service;
/// Market endpoints implemented on the session client
pub mod market_service;

pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::general::GeneralService;
pub use crate::application::interfaces::market::MarketService;
