//! # secrets-backend
//!
//! A pluggable contract for retrieving connection credentials, variables,
//! and configuration overrides from a secrets store, without callers knowing
//! which store is configured.
//!
//! ## Core Components
//!
//! - **Backend contract**: [`SecretsBackend`] primitives and the derived
//!   [`ConnectionLookup`] accessors
//! - **Paths**: [`build_path`] and [`SecretPaths`] for hierarchical stores
//! - **Composition**: [`BackendChain`] search paths and [`BackendRegistry`]
//!   construction from [`SecretsConfig`]
//! - **Conformance**: [`conformance::Conformance`] checks any backend against
//!   the contract
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use secrets_backend::{BackendRegistry, ConnectionLookup, SecretsConfig};
//!
//! #[tokio::main]
//! async fn main() -> secrets_backend::Result<()> {
//!     let config = SecretsConfig::from_env()?;
//!     let registry = BackendRegistry::with_builtin();
//!
//!     if let Some(backend) = registry.build(&config)? {
//!         if let Some(conn) = backend.get_connection("db_main").await? {
//!             tracing::info!(connection = %conn, "Resolved connection");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connection;
pub mod observability;
pub mod secrets;

pub use self::config::{parse_backend_kwargs, BackendKwargs, SecretsConfig};
pub use connection::Connection;
pub use secrets::conformance;
pub use secrets::{
    build_default_path, build_path, BackendChain, BackendRegistry, ConnectionLookup,
    MemoryBackend, MemoryBackendConfig, Result, SecretPaths, SecretsBackend, SecretsError,
    DEFAULT_SEPARATOR,
};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_available() {
        assert!(!VERSION.is_empty());
    }
}
