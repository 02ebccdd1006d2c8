//! # Configuration Management
//!
//! Backend selection ([`SecretsConfig`]) and conversion of untyped backend
//! options into typed, validated configuration structs.

pub mod kwargs;
pub mod settings;

pub use kwargs::{parse_backend_kwargs, BackendKwargs};
pub use settings::{SecretsConfig, ENV_PREFIX};
