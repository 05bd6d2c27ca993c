/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Environment lookups used by [`Config::new`](crate::application::config::Config::new)

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Reads and parses an environment variable, falling back to `default`
///
/// A value that is present but does not parse is logged and replaced by the default.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {env_var}={val:?} ({e:?}), using default");
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, `None` when missing or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var)
        .ok()
        .and_then(|val| val.trim().parse::<T>().ok())
}

/// Reads a boolean switch
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off` in any case. Anything else
/// keeps the default.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    let Ok(val) = env::var(env_var) else {
        return default;
    };
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        other => {
            warn!("Unrecognised value {other:?} for {env_var}, using {default}");
            default
        }
    }
}
