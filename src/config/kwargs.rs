//! Backend options.
//!
//! Options arrive as an open JSON object and are converted into each
//! backend's own typed configuration struct, then validated, before the
//! backend is constructed.

use crate::secrets::error::{Result, SecretsError};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use validator::Validate;

/// Untyped backend options as configured.
pub type BackendKwargs = serde_json::Map<String, serde_json::Value>;

/// Convert `kwargs` into the typed configuration of backend `backend`.
///
/// Unknown or mistyped options, and options failing validation, are
/// reported as [`SecretsError::ConfigError`] naming the backend.
pub fn parse_backend_kwargs<T>(backend: &str, kwargs: &BackendKwargs) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let config: T = serde_json::from_value(serde_json::Value::Object(kwargs.clone())).map_err(
        |e| SecretsError::config_error(format!("Invalid options for backend '{}': {}", backend, e)),
    )?;

    Validate::validate(&config).map_err(|errors| match SecretsError::from(errors) {
        SecretsError::ConfigError { message } => SecretsError::config_error(format!(
            "Invalid options for backend '{}': {}",
            backend, message
        )),
        other => other,
    })?;

    Ok(config)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKwargs {
    Json(String),
    Table(BackendKwargs),
}

/// Accepts either a table or a JSON object encoded as a string, the form
/// used when options come from an environment variable.
pub(crate) fn deserialize_kwargs<'de, D>(deserializer: D) -> std::result::Result<BackendKwargs, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawKwargs>::deserialize(deserializer)? {
        None => Ok(BackendKwargs::new()),
        Some(RawKwargs::Table(map)) => Ok(map),
        Some(RawKwargs::Json(raw)) if raw.trim().is_empty() => Ok(BackendKwargs::new()),
        Some(RawKwargs::Json(raw)) => match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Object(map)) => Ok(map),
            Ok(_) => Err(de::Error::custom("backend_kwargs must be a JSON object")),
            Err(e) => Err(de::Error::custom(format!("backend_kwargs is not valid JSON: {}", e))),
        },
    }
}
