/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, error};

/// Reads an environment variable and parses it, falling back to `default`
///
/// A variable that is set but cannot be parsed is reported with `error!` and
/// replaced by the default, so a typo in `.env` never aborts start-up.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is unset or unparsable
pub fn get_env_or_default<T>(env_var: &str, default: T) -> T
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    match get_env_or_none::<T>(env_var) {
        Some(value) => value,
        None => {
            debug!("{} not set, using default", env_var);
            default
        }
    }
}

/// Reads an environment variable and parses it, returning `None` when it is
/// unset or does not parse
pub fn get_env_or_none<T>(env_var: &str) -> Option<T>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    let raw = env::var(env_var).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Failed to parse {}={}: {}", env_var, raw, e);
            None
        }
    }
}
