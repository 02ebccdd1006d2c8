//! # Structured Logging
//!
//! Installs a `tracing` subscriber for applications embedding the secrets
//! layer. Library code only emits events; it never installs a subscriber on
//! its own.
//!
//! Secret values and connection passwords are never written to log fields.

use crate::secrets::error::{Result, SecretsError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `info` or `secrets_backend=debug`
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string(), json_logs: false }
    }
}

impl ObservabilityConfig {
    /// Create configuration from environment variables
    ///
    /// - `SECRETS_LOG_LEVEL` (default: `info`)
    /// - `SECRETS_LOG_JSON` (`true`/`1` enables JSON output)
    pub fn from_env() -> Result<Self> {
        let log_level = std::env::var("SECRETS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let json_logs = match std::env::var("SECRETS_LOG_JSON") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                SecretsError::config_error(format!("Invalid SECRETS_LOG_JSON value: {}", value))
            })?,
            Err(_) => false,
        };

        Ok(Self { log_level, json_logs })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Install the global tracing subscriber.
///
/// Fails if the filter directive is invalid or a subscriber is already set.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|e| {
        SecretsError::config_error(format!("Invalid log level '{}': {}", config.log_level, e))
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json_logs {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    installed.map_err(|e| {
        SecretsError::config_error(format!("Failed to install tracing subscriber: {}", e))
    })?;

    tracing::info!(log_level = %config.log_level, json = config.json_logs, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" 1 "), Some(true));
        assert_eq!(parse_flag("OFF"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_invalid_directive_rejected() {
        // Rejected before any subscriber is installed.
        let config =
            ObservabilityConfig { log_level: "secrets_backend=loud".to_string(), json_logs: false };
        assert!(init_tracing(&config).is_err());
    }
}
