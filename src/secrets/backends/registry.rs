//! Secret backend registry
//!
//! Maps backend names to factories and builds the configured backend from
//! [`SecretsConfig`]. Concrete backends living in other crates register
//! themselves here; the registry only knows them by name.

use super::backend::SecretsBackend;
use super::memory::{MemoryBackend, MEMORY_BACKEND_NAME};
use crate::config::{BackendKwargs, SecretsConfig};
use crate::secrets::error::{Result, SecretsError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds a backend from its `backend_kwargs`.
pub type BackendFactory =
    Box<dyn Fn(&BackendKwargs) -> Result<Arc<dyn SecretsBackend>> + Send + Sync>;

/// Registry of secret backend factories keyed by name.
#[derive(Default)]
pub struct BackendRegistry {
    factories: HashMap<String, BackendFactory>,
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry").field("backends", &self.registered_backends()).finish()
    }
}

impl BackendRegistry {
    /// Create a registry with no backends
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the backends shipped in this crate
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(MEMORY_BACKEND_NAME, |kwargs| {
            Ok(Arc::new(MemoryBackend::from_kwargs(kwargs)?) as Arc<dyn SecretsBackend>)
        });
        registry
    }

    /// Register a backend factory, replacing any factory with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&BackendKwargs) -> Result<Arc<dyn SecretsBackend>> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(backend = %name, "Registering secrets backend factory");
        self.factories.insert(name, Box::new(factory));
    }

    /// Check if a backend is registered
    pub fn has_backend(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered backend names, sorted
    pub fn registered_backends(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Build the backend named by `config`.
    ///
    /// Returns `Ok(None)` when no backend is configured. Fails on an unknown
    /// name or when the backend rejects its kwargs, so a misconfiguration is
    /// reported before the first lookup.
    pub fn build(&self, config: &SecretsConfig) -> Result<Option<Arc<dyn SecretsBackend>>> {
        config.validate()?;

        let Some(name) = config.backend.as_deref() else {
            debug!("No secrets backend configured");
            return Ok(None);
        };

        let factory = self.factories.get(name).ok_or_else(|| {
            SecretsError::config_error(format!(
                "Unknown secrets backend '{}' (registered: {})",
                name,
                self.registered_backends().join(", ")
            ))
        })?;

        let backend = factory(&config.backend_kwargs)?;

        // Option names only; values may hold credentials.
        let options: Vec<&str> = config.backend_kwargs.keys().map(String::as_str).collect();
        info!(backend = %name, options = ?options, "Configured secrets backend");

        Ok(Some(backend))
    }
}
