//! Connection handle produced from a backend's connection URI.
//!
//! The URI is opaque to the secrets layer. It is only parsed to mask the
//! password when a connection is formatted for logs or debugging.

use std::fmt;
use url::Url;

const REDACTED: &str = "[REDACTED]";
const PASSWORD_MASK: &str = "***";

/// A connection identified by `conn_id`, carrying the URI the backend returned.
#[derive(Clone, PartialEq, Eq)]
pub struct Connection {
    conn_id: String,
    uri: String,
}

impl Connection {
    /// Creates a connection from its id and URI.
    pub fn new(conn_id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self { conn_id: conn_id.into(), uri: uri.into() }
    }

    /// The logical connection id.
    pub fn conn_id(&self) -> &str {
        &self.conn_id
    }

    /// The full URI, credentials included.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The URI with any password replaced, suitable for logs.
    ///
    /// URIs that cannot be parsed are redacted entirely.
    pub fn redacted_uri(&self) -> String {
        match Url::parse(&self.uri) {
            Ok(mut url) => {
                if url.password().is_some() && url.set_password(Some(PASSWORD_MASK)).is_err() {
                    return REDACTED.to_string();
                }
                url.to_string()
            }
            Err(_) => REDACTED.to_string(),
        }
    }

    /// Consumes the connection, returning `(conn_id, uri)`.
    pub fn into_parts(self) -> (String, String) {
        (self.conn_id, self.uri)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("conn_id", &self.conn_id)
            .field("uri", &self.redacted_uri())
            .finish()
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.conn_id, self.redacted_uri())
    }
}
