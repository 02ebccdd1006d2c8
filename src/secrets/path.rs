//! Path construction for secrets stored in hierarchical key-value stores.
//!
//! Paths are plain concatenations of a prefix, a separator, and a secret id.
//! Nothing is normalized or escaped: callers choose prefixes and ids that are
//! valid keys for the target store.

use serde::{Deserialize, Serialize};

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Default prefix under which connection URIs are stored.
pub const DEFAULT_CONNECTIONS_PREFIX: &str = "connections";

/// Default prefix under which variables are stored.
pub const DEFAULT_VARIABLES_PREFIX: &str = "variables";

/// Default prefix under which configuration overrides are stored.
pub const DEFAULT_CONFIG_PREFIX: &str = "config";

/// Builds `path_prefix + sep + secret_id`.
///
/// ```
/// use secrets_backend::build_path;
///
/// assert_eq!(build_path("secrets", "api_key", "-"), "secrets-api_key");
/// ```
pub fn build_path(path_prefix: &str, secret_id: &str, sep: &str) -> String {
    let mut path = String::with_capacity(path_prefix.len() + sep.len() + secret_id.len());
    path.push_str(path_prefix);
    path.push_str(sep);
    path.push_str(secret_id);
    path
}

/// [`build_path`] with the default `/` separator.
pub fn build_default_path(path_prefix: &str, secret_id: &str) -> String {
    build_path(path_prefix, secret_id, DEFAULT_SEPARATOR)
}

/// Per-kind prefixes for a hierarchical store.
///
/// A prefix set to `None` disables that kind of lookup: the matching path
/// method returns `None` and backends answer "absent" without querying the
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretPaths {
    pub connections_prefix: Option<String>,
    pub variables_prefix: Option<String>,
    pub config_prefix: Option<String>,
    pub sep: String,
}

impl Default for SecretPaths {
    fn default() -> Self {
        Self {
            connections_prefix: Some(DEFAULT_CONNECTIONS_PREFIX.to_string()),
            variables_prefix: Some(DEFAULT_VARIABLES_PREFIX.to_string()),
            config_prefix: Some(DEFAULT_CONFIG_PREFIX.to_string()),
            sep: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl SecretPaths {
    /// Path of the connection URI for `conn_id`.
    pub fn connection_path(&self, conn_id: &str) -> Option<String> {
        self.connections_prefix.as_deref().map(|prefix| build_path(prefix, conn_id, &self.sep))
    }

    /// Path of the variable `key`.
    pub fn variable_path(&self, key: &str) -> Option<String> {
        self.variables_prefix.as_deref().map(|prefix| build_path(prefix, key, &self.sep))
    }

    /// Path of the configuration override `key`.
    pub fn config_path(&self, key: &str) -> Option<String> {
        self.config_prefix.as_deref().map(|prefix| build_path(prefix, key, &self.sep))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_path_examples() {
        assert_eq!(build_default_path("airflow/connections", "db_main"), "airflow/connections/db_main");
        assert_eq!(build_path("secrets", "api_key", "-"), "secrets-api_key");
    }

    #[test]
    fn test_build_path_does_not_normalize() {
        assert_eq!(build_default_path("prefix/", "/id"), "prefix///id");
        assert_eq!(build_default_path("", ""), "/");
        assert_eq!(build_path("a", "b", ""), "ab");
    }

    #[test]
    fn test_default_paths() {
        let paths = SecretPaths::default();
        assert_eq!(paths.connection_path("db"), Some("connections/db".to_string()));
        assert_eq!(paths.variable_path("key"), Some("variables/key".to_string()));
        assert_eq!(paths.config_path("core.fernet"), Some("config/core.fernet".to_string()));
    }

    #[test]
    fn test_disabled_prefix() {
        let paths = SecretPaths { variables_prefix: None, ..SecretPaths::default() };
        assert_eq!(paths.variable_path("key"), None);
        assert!(paths.connection_path("db").is_some());
    }

    #[test]
    fn test_custom_separator() {
        let paths = SecretPaths {
            connections_prefix: Some("airflow-connections".to_string()),
            sep: "-".to_string(),
            ..SecretPaths::default()
        };
        assert_eq!(paths.connection_path("db"), Some("airflow-connections-db".to_string()));
    }
}
