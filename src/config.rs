use std::env;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token. Optional; unauthenticated requests work against
    /// public repositories at a lower rate limit.
    pub github_token: Option<String>,
    /// Trailing window for the recent-commit histogram, in days.
    pub recent_days: i64,
    /// Pause between successive profile fetches in the comparator.
    pub request_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        let recent_days = parse_var("GITALYZE_RECENT_DAYS", 30)?;
        let request_delay_ms = parse_var("GITALYZE_REQUEST_DELAY_MS", 100)?;

        Ok(Self {
            github_token,
            recent_days,
            request_delay_ms,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            recent_days: 30,
            request_delay_ms: 100,
        }
    }
}

/// Parses an optional environment variable, erroring on a set-but-invalid
/// value instead of silently falling back to the default.
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| Error::Config(format!("invalid value for {}: '{}'", name, value))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global; all cases share one test so
    // parallel execution cannot interleave them.
    #[test]
    fn test_from_env_parsing() {
        env::remove_var("GITALYZE_RECENT_DAYS");
        env::remove_var("GITALYZE_REQUEST_DELAY_MS");
        let config = Config::from_env().unwrap();
        assert_eq!(config.recent_days, 30);
        assert_eq!(config.request_delay_ms, 100);

        env::set_var("GITALYZE_RECENT_DAYS", "7");
        env::set_var("GITALYZE_REQUEST_DELAY_MS", "250");
        let config = Config::from_env().unwrap();
        assert_eq!(config.recent_days, 7);
        assert_eq!(config.request_delay_ms, 250);

        env::set_var("GITALYZE_RECENT_DAYS", "not-a-number");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("GITALYZE_RECENT_DAYS"));

        env::remove_var("GITALYZE_RECENT_DAYS");
        env::remove_var("GITALYZE_REQUEST_DELAY_MS");
    }
}
