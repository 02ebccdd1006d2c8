//! # Observability
//!
//! Structured logging setup, metric descriptions, and the single emission
//! point for deprecated API usage.

pub mod deprecation;
pub mod logging;
pub mod metrics;

pub use deprecation::{record_deprecated_call, DEPRECATED_CALLS_METRIC, DEPRECATION_TARGET};
pub use logging::{init_tracing, ObservabilityConfig};
pub use self::metrics::describe_metrics;
