//! hf-metrics: derived test metrics over a (selected) dataset window.
//!
//! Every metric is computed independently. A metric whose inputs are missing
//! (unassigned role, bad time ordering, empty window) comes back as an
//! `Err(MetricError)` while the others are still produced.

pub mod error;
pub mod metrics;
pub mod stats;

pub use error::{MetricError, MetricsResult};
pub use metrics::{ComputedMetrics, Metric, compute_metrics, window_mean};
pub use stats::moving_average;
