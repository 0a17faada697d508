//! Observability: structured logging and operational counters.
//!
//! Observation is read-only. Nothing in this module may change the
//! outcome of a request.

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
