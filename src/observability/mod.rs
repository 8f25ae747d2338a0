//! Observability for the employee service
//!
//! - Structured logging through `tracing`
//! - Request counters exposed at `/metrics`

mod logging;
mod metrics;

pub use logging::{env_filter, init_tracing};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
