/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value used when the variable is missing or does not parse
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
///
/// A variable that is set but does not parse is logged, so a typo such as
/// `30s` does not go unnoticed.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => match val.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                error!("Failed to parse {}: {} ({:?}), ignoring it", env_var, val, e);
                None
            }
        },
        Err(_) => None,
    }
}
