//! # Secrets Configuration
//!
//! Selects the secrets backend and carries its options. Values come from an
//! optional configuration file, overridden by environment variables:
//!
//! - `SECRETS_BACKEND`: registered backend name, e.g. `memory`
//! - `SECRETS_BACKEND_KWARGS`: backend options as a JSON object
//!
//! ```toml
//! backend = "memory"
//!
//! [backend_kwargs]
//! connections_prefix = "airflow/connections"
//! ```

use super::kwargs::{deserialize_kwargs, BackendKwargs};
use crate::secrets::error::{Result, SecretsError};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use validator::Validate;

/// Prefix of the environment variables read by [`SecretsConfig::load`].
pub const ENV_PREFIX: &str = "SECRETS";

/// Secrets backend selection and options
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SecretsConfig {
    /// Registered backend name; `None` means no backend is configured
    #[serde(default)]
    #[validate(length(min = 1, message = "Backend name cannot be empty"))]
    pub backend: Option<String>,

    /// Options handed to the backend's factory
    #[serde(default, deserialize_with = "deserialize_kwargs")]
    pub backend_kwargs: BackendKwargs,
}

impl SecretsConfig {
    /// Configuration naming `backend` with no options
    pub fn for_backend(backend: impl Into<String>) -> Self {
        Self { backend: Some(backend.into()), backend_kwargs: BackendKwargs::new() }
    }

    /// Load from an optional file, then `SECRETS_*` environment variables.
    ///
    /// A `path` that does not exist is an error; pass `None` to read the
    /// environment only.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!(path = %path.display(), "Loading secrets configuration file");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_"));

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `SECRETS_*` environment variables only
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(SecretsError::from)?;

        if self.backend.is_none() && !self.backend_kwargs.is_empty() {
            return Err(SecretsError::config_error(
                "backend_kwargs supplied but no backend is configured",
            ));
        }

        Ok(())
    }
}
