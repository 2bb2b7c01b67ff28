/// Application configuration module
pub mod config;
/// Endpoint service interfaces
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Endpoint service implementations
pub mod services;
