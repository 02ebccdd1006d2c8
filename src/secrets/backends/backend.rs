//! Secrets backend trait.
//!
//! Defines the primitives every backend provides. Structured connection
//! lookups are derived from them in [`crate::secrets::lookup`].

use crate::secrets::error::{Result, SecretsError};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for pluggable secrets backends.
///
/// Implementations must be Send + Sync for use in async contexts, and must not
/// mutate their state from read operations. A backend that needs internal
/// mutable state (a client pool, a token refresher) owns its locking.
///
/// "Not found" is always `Ok(None)`. `Err` is reserved for infrastructure
/// failures such as an unreachable store or rejected credentials.
///
/// # Example Implementation
///
/// ```rust
/// use async_trait::async_trait;
/// use secrets_backend::{Result, SecretsBackend};
/// use std::collections::HashMap;
///
/// #[derive(Debug)]
/// struct StaticBackend {
///     uris: HashMap<String, String>,
/// }
///
/// #[async_trait]
/// impl SecretsBackend for StaticBackend {
///     async fn get_conn_uri(&self, conn_id: &str) -> Result<Option<String>> {
///         Ok(self.uris.get(conn_id).cloned())
///     }
/// }
/// ```
#[async_trait]
pub trait SecretsBackend: Send + Sync + std::fmt::Debug {
    /// Name used in diagnostics and [`SecretsError::NotImplemented`].
    fn backend_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Look up the URI of connection `conn_id`.
    ///
    /// Every backend is expected to implement this. The default signals
    /// [`SecretsError::NotImplemented`].
    async fn get_conn_uri(&self, _conn_id: &str) -> Result<Option<String>> {
        Err(SecretsError::not_implemented(self.backend_name(), "get_conn_uri"))
    }

    /// Look up the value of variable `key`.
    ///
    /// Backends without variable support may leave the default, which signals
    /// [`SecretsError::NotImplemented`] rather than reporting the variable as
    /// missing.
    async fn get_variable(&self, _key: &str) -> Result<Option<String>> {
        Err(SecretsError::not_implemented(self.backend_name(), "get_variable"))
    }

    /// Look up configuration override `key`.
    ///
    /// Defaults to absent for every key.
    async fn get_config(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

#[async_trait]
impl<B: SecretsBackend + ?Sized> SecretsBackend for Arc<B> {
    fn backend_name(&self) -> &str {
        (**self).backend_name()
    }

    async fn get_conn_uri(&self, conn_id: &str) -> Result<Option<String>> {
        (**self).get_conn_uri(conn_id).await
    }

    async fn get_variable(&self, key: &str) -> Result<Option<String>> {
        (**self).get_variable(key).await
    }

    async fn get_config(&self, key: &str) -> Result<Option<String>> {
        (**self).get_config(key).await
    }
}
