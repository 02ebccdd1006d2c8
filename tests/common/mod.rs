//! Common test utilities for all integration tests.
//!
//! Provides minimal backends written the way an external implementer would
//! write them, plus a lock for tests that touch process environment.

#![allow(dead_code)]
#![allow(clippy::duplicate_mod)]

use async_trait::async_trait;
use secrets_backend::{Result, SecretsBackend, SecretsError};
use std::collections::HashMap;
use std::sync::Mutex;

/// Serializes tests that modify environment variables
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Backend that only knows connection URIs
#[derive(Debug, Default)]
pub struct UriMapBackend {
    uris: HashMap<String, String>,
}

impl UriMapBackend {
    pub fn new<const N: usize>(entries: [(&str, &str); N]) -> Self {
        Self {
            uris: entries.into_iter().map(|(id, uri)| (id.to_string(), uri.to_string())).collect(),
        }
    }
}

#[async_trait]
impl SecretsBackend for UriMapBackend {
    fn backend_name(&self) -> &str {
        "uri_map"
    }

    async fn get_conn_uri(&self, conn_id: &str) -> Result<Option<String>> {
        Ok(self.uris.get(conn_id).cloned())
    }
}

/// Backend that implements nothing
#[derive(Debug)]
pub struct EmptyBackend;

impl SecretsBackend for EmptyBackend {}

/// Backend whose store is unreachable
#[derive(Debug)]
pub struct UnreachableBackend;

#[async_trait]
impl SecretsBackend for UnreachableBackend {
    fn backend_name(&self) -> &str {
        "unreachable"
    }

    async fn get_conn_uri(&self, _conn_id: &str) -> Result<Option<String>> {
        Err(SecretsError::connection_failed("connection refused"))
    }

    async fn get_variable(&self, _key: &str) -> Result<Option<String>> {
        Err(SecretsError::connection_failed("connection refused"))
    }

    async fn get_config(&self, _key: &str) -> Result<Option<String>> {
        Err(SecretsError::malformed_response("unexpected payload"))
    }
}

/// Run `f` with `vars` set, restoring previous values afterwards
pub fn with_env<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let saved: Vec<(String, Option<String>)> =
        vars.iter().map(|(name, _)| (name.to_string(), std::env::var(name).ok())).collect();

    for (name, value) in vars {
        match value {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    }

    let result = f();

    for (name, value) in saved {
        match value {
            Some(value) => std::env::set_var(&name, value),
            None => std::env::remove_var(&name),
        }
    }

    result
}
