//! Pluggable secret backend architecture
//!
//! - [`SecretsBackend`]: the primitives a backend provides
//! - [`MemoryBackend`]: in-process reference backend
//! - [`BackendRegistry`]: builds the configured backend by name
//!
//! Remote stores (Vault, cloud secret managers, databases) implement
//! [`SecretsBackend`] in their own crates.

pub mod backend;
pub mod memory;
pub mod registry;

pub use backend::SecretsBackend;
pub use memory::{MemoryBackend, MemoryBackendConfig, MEMORY_BACKEND_NAME};
pub use registry::{BackendFactory, BackendRegistry};
