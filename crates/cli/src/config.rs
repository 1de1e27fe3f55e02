//! Configuration loading (environment variables).

use thiserror::Error;

use cinema_observability::{LogFormat, UnknownLogFormat};

pub const LOG_FORMAT_VAR: &str = "CINEMA_LOG_FORMAT";
pub const PAYMENT_FAILURE_VAR: &str = "CINEMA_SIMULATE_PAYMENT_FAILURE";
pub const SEAT_FAILURE_VAR: &str = "CINEMA_SIMULATE_SEAT_FAILURE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CINEMA_LOG_FORMAT: {0}")]
    LogFormat(#[from] UnknownLogFormat),
}

/// Runtime configuration for the `cinema-tickets` binary.
///
/// Prices and the ticket cap are fixed business rules and are not
/// configurable here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub log_format: LogFormat,
    /// When set, every charge is declined with this reason.
    pub simulate_payment_failure: Option<String>,
    /// When set, every seat reservation is refused with this reason.
    pub simulate_seat_failure: Option<String>,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the
    /// process environment). Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            log_format,
            simulate_payment_failure: get(PAYMENT_FAILURE_VAR),
            simulate_seat_failure: get(SEAT_FAILURE_VAR),
        })
    }
}
