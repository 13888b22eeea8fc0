use std::time::Duration;

use crate::error::config::ConfigError;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("ogame-api/", env!("CARGO_PKG_VERSION"));

/// Request timeout used when `OGAME_REQUEST_TIMEOUT_SECS` is not set.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `OGAME_USER_AGENT` (required) and `OGAME_REQUEST_TIMEOUT_SECS` (optional).
    pub fn from_env() -> Result<Self, ConfigError> {
        let user_agent = std::env::var("OGAME_USER_AGENT")
            .map_err(|_| ConfigError::MissingEnvVar("OGAME_USER_AGENT".to_string()))?;

        let request_timeout = match std::env::var("OGAME_REQUEST_TIMEOUT_SECS") {
            Ok(value) => parse_timeout("OGAME_REQUEST_TIMEOUT_SECS", &value)?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            user_agent,
            request_timeout,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

fn parse_timeout(var: &str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "timeout must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
