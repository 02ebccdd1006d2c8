//! Ordered search path over several secrets backends.
//!
//! Each lookup asks the backends in order and returns the first value found.
//! A backend answering "absent" hands the lookup to the next one. A backend
//! answering with an error stops the search and the error is returned as is,
//! including [`SecretsError::NotImplemented`](crate::SecretsError::NotImplemented).
//!
//! # Example
//!
//! ```rust
//! use secrets_backend::{BackendChain, MemoryBackend};
//! use std::sync::Arc;
//!
//! let overrides = MemoryBackend::default().with_connection("db", "sqlite:///override.db");
//! let defaults = MemoryBackend::default().with_connection("db", "sqlite:///default.db");
//!
//! let chain = BackendChain::new().with(Arc::new(overrides)).with(Arc::new(defaults));
//! assert_eq!(chain.backend_names(), vec!["memory", "memory"]);
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::backends::SecretsBackend;
use super::error::Result;

/// Secrets backend that consults a list of backends in order.
#[derive(Debug, Clone, Default)]
pub struct BackendChain {
    backends: Vec<Arc<dyn SecretsBackend>>,
}

impl BackendChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a backend, returning the chain.
    pub fn with(mut self, backend: Arc<dyn SecretsBackend>) -> Self {
        self.push(backend);
        self
    }

    /// Appends a backend to the end of the search path.
    pub fn push(&mut self, backend: Arc<dyn SecretsBackend>) {
        self.backends.push(backend);
    }

    /// Number of backends in the chain.
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// True when the chain has no backends.
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Backend names in search order.
    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.backend_name()).collect()
    }
}

#[async_trait]
impl SecretsBackend for BackendChain {
    fn backend_name(&self) -> &str {
        "chain"
    }

    async fn get_conn_uri(&self, conn_id: &str) -> Result<Option<String>> {
        for backend in &self.backends {
            if let Some(uri) = backend.get_conn_uri(conn_id).await? {
                debug!(backend = %backend.backend_name(), conn_id = %conn_id, "Resolved connection");
                return Ok(Some(uri));
            }
        }
        Ok(None)
    }

    async fn get_variable(&self, key: &str) -> Result<Option<String>> {
        for backend in &self.backends {
            if let Some(value) = backend.get_variable(key).await? {
                debug!(backend = %backend.backend_name(), key = %key, "Resolved variable");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    async fn get_config(&self, key: &str) -> Result<Option<String>> {
        for backend in &self.backends {
            if let Some(value) = backend.get_config(key).await? {
                debug!(backend = %backend.backend_name(), key = %key, "Resolved config override");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}
