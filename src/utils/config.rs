/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// A value that is present but cannot be parsed is logged and replaced by the default.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={:?}: {:?}, using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` if missing or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T> {
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}
