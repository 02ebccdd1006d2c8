//! Structured connection lookups derived from [`SecretsBackend::get_conn_uri`].
//!
//! [`ConnectionLookup`] is implemented for every backend through a blanket impl,
//! so a backend gains connection support as soon as it can return a URI and
//! cannot change how connections are assembled.

use crate::connection::Connection;
use crate::observability::deprecation::record_deprecated_call;
use crate::secrets::backends::SecretsBackend;
use crate::secrets::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Connection accessors available on every [`SecretsBackend`].
#[async_trait]
pub trait ConnectionLookup: SecretsBackend {
    /// Return the connection for `conn_id`, or `None` when the backend has no
    /// URI for it.
    ///
    /// Errors from `get_conn_uri` are returned unchanged.
    async fn get_connection(&self, conn_id: &str) -> Result<Option<Connection>>;

    /// Return the connection for `conn_id` as a zero- or one-element list.
    ///
    /// Kept for callers written against the plural accessor. Every call emits
    /// a deprecation notice. Scheduled for removal.
    #[deprecated(note = "use `get_connection`; `get_connections` is scheduled for removal")]
    async fn get_connections(&self, conn_id: &str) -> Result<Vec<Connection>>;
}

#[async_trait]
impl<B: SecretsBackend + ?Sized> ConnectionLookup for B {
    async fn get_connection(&self, conn_id: &str) -> Result<Option<Connection>> {
        match self.get_conn_uri(conn_id).await? {
            Some(uri) if !uri.is_empty() => Ok(Some(Connection::new(conn_id, uri))),
            _ => {
                debug!(backend = %self.backend_name(), conn_id = %conn_id, "Connection not found");
                Ok(None)
            }
        }
    }

    async fn get_connections(&self, conn_id: &str) -> Result<Vec<Connection>> {
        record_deprecated_call("get_connections", "get_connection");
        Ok(self.get_connection(conn_id).await?.into_iter().collect())
    }
}
