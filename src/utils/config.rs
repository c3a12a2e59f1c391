use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable, falling back to the given default when
/// the variable is unset or does not parse as `T`.
///
/// A set-but-unparsable value is reported and ignored rather than treated
/// as fatal; the gateway always starts with a usable configuration.
pub fn get_env_or_default<T: FromStr>(name: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(name) else {
        return default;
    };
    raw.parse::<T>().unwrap_or_else(|_| {
        warn!("Ignoring unparsable {name}={raw}, using the default");
        default
    })
}

/// Reads and parses an environment variable, `None` when unset or invalid.
pub fn get_env_or_none<T: FromStr>(name: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(name).ok().and_then(|raw| raw.parse::<T>().ok())
}
