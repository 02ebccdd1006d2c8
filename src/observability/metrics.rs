//! Metric descriptions.
//!
//! Counters are recorded through the `metrics` facade and are no-ops until
//! the application installs a recorder.

use super::deprecation::DEPRECATED_CALLS_METRIC;
use metrics::{describe_counter, Unit};

/// Register descriptions for every metric this crate records.
pub fn describe_metrics() {
    describe_counter!(
        DEPRECATED_CALLS_METRIC,
        Unit::Count,
        "Calls to deprecated secrets backend accessors, labelled by method"
    );
}
