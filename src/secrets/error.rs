//! Error types for secrets backend operations.
//!
//! A missing secret is never an error: lookups return `Ok(None)`. Everything
//! in [`SecretsError`] is either a setup problem (an unimplemented primitive,
//! bad configuration) or an infrastructure failure raised by a concrete
//! backend.

use thiserror::Error;

/// Result type for secrets operations.
pub type Result<T> = std::result::Result<T, SecretsError>;

/// Errors that can occur while configuring or querying a secrets backend.
#[derive(Error, Debug)]
pub enum SecretsError {
    /// The backend does not provide this primitive.
    ///
    /// Surface this as a setup error. It does not mean "not found".
    #[error("{backend} does not implement {operation}")]
    NotImplemented { backend: String, operation: &'static str },

    /// The backing store could not be reached.
    #[error("Backend connection failed: {message}")]
    ConnectionFailed { message: String },

    /// Authentication with the backing store failed.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// The backing store answered with something the backend cannot interpret.
    #[error("Malformed backend response: {message}")]
    MalformedResponse { message: String },

    /// Backend-specific error.
    #[error("Backend error: {message}")]
    BackendError { message: String },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Loading configuration sources failed.
    #[error("Configuration loading failed: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SecretsError {
    /// Create a not implemented error.
    pub fn not_implemented(backend: impl Into<String>, operation: &'static str) -> Self {
        Self::NotImplemented { backend: backend.into(), operation }
    }

    /// Create a connection failed error.
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed { message: message.into() }
    }

    /// Create an authentication failed error.
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::AuthenticationFailed { message: message.into() }
    }

    /// Create a malformed response error.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse { message: message.into() }
    }

    /// Create a backend error.
    pub fn backend_error(message: impl Into<String>) -> Self {
        Self::BackendError { message: message.into() }
    }

    /// Create a config error.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError { message: message.into() }
    }

    /// True when a backend was asked for a primitive it does not provide.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// True for failures originating in the backing store's I/O.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. }
                | Self::AuthenticationFailed { .. }
                | Self::MalformedResponse { .. }
                | Self::BackendError { .. }
        )
    }
}

impl From<validator::ValidationErrors> for SecretsError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message.as_ref().map_or("Invalid value".to_string(), |m| m.to_string())
                    })
                    .collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect();
        fields.sort();

        Self::config_error(format!("Validation failed: {}", fields.join("; ")))
    }
}
