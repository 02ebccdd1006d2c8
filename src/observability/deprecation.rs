//! Single emission point for deprecated API usage.
//!
//! Every call to a deprecated accessor goes through [`record_deprecated_call`],
//! which emits one `WARN` event and bumps one counter, so remaining callers can
//! be found in logs and dashboards before the accessor is removed.

use metrics::counter;

/// Tracing target for deprecation notices.
pub const DEPRECATION_TARGET: &str = "secrets_backend::deprecation";

/// Counter incremented once per deprecated call, labelled by `method`.
pub const DEPRECATED_CALLS_METRIC: &str = "secrets_backend_deprecated_calls_total";

/// Records one use of a deprecated method.
pub fn record_deprecated_call(method: &'static str, replacement: &'static str) {
    tracing::warn!(
        target: DEPRECATION_TARGET,
        method = method,
        replacement = replacement,
        "`{}` is deprecated and scheduled for removal; use `{}` instead",
        method,
        replacement
    );
    counter!(DEPRECATED_CALLS_METRIC, "method" => method).increment(1);
}
