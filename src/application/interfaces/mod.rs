/// Account service interface
pub mod account;
/// Session and application housekeeping interface
pub mod general;
/// Market service interface
pub mod market;
