//! Hotfire / cold-flow summary metrics.
//!
//! Values are in dataset column units: impulse is thrust-unit·s, mass flow is
//! weight-unit/s. Unit conversion happens where results meet SI quantities.

use hf_data::{Dataset, Selection, Window};
use hf_roles::{Role, RoleMapping};
use serde::Serialize;

use crate::error::{MetricError, MetricsResult};
use crate::stats::{endpoints, linear_slope, mean, peak, require_increasing, trapezoid};

/// A single metric value or the reason it is unavailable.
pub type Metric = Result<f64, MetricError>;

/// Metrics for one window of the dataset. Rebuilt on every recompute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedMetrics {
    /// Rows the metrics were computed over (inclusive)
    pub window: Window,
    pub peak_thrust: Metric,
    pub mean_thrust: Metric,
    pub peak_pressure: Metric,
    pub mean_pressure: Metric,
    /// time[last] - time[first]
    pub burn_duration: Metric,
    /// Trapezoidal integral of thrust over time
    pub total_impulse: Metric,
    /// weight[last] - weight[first], negative while propellant drains
    pub weight_delta: Metric,
    /// |weight delta| / burn duration
    pub average_mass_flow: Metric,
    /// Negated least-squares slope of weight vs time
    pub regressed_mass_flow: Metric,
}

impl ComputedMetrics {
    fn all(&self) -> [&Metric; 9] {
        [
            &self.peak_thrust,
            &self.mean_thrust,
            &self.peak_pressure,
            &self.mean_pressure,
            &self.burn_duration,
            &self.total_impulse,
            &self.weight_delta,
            &self.average_mass_flow,
            &self.regressed_mass_flow,
        ]
    }

    /// Number of metrics that could be computed.
    pub fn available(&self) -> usize {
        self.all().iter().filter(|m| m.is_ok()).count()
    }

    pub fn has_data(&self) -> bool {
        self.available() > 0
    }
}

/// Compute every metric for the window named by `selection` (all rows if `None`).
///
/// Only an invalid selection fails the call; missing roles or bad data make the
/// affected metrics unavailable.
pub fn compute_metrics(
    dataset: &Dataset,
    mapping: &RoleMapping,
    selection: Option<&Selection>,
) -> MetricsResult<ComputedMetrics> {
    let window = Window::resolve(selection, dataset.row_count())?;

    let time = role_column(dataset, mapping, &window, Role::Time);
    let thrust = role_column(dataset, mapping, &window, Role::Thrust);
    let pressure = role_column(dataset, mapping, &window, Role::Pressure);
    let weight = role_column(dataset, mapping, &window, Role::Weight);

    let ordered_time = time
        .clone()
        .and_then(|t| require_increasing(t, window.first).map(|()| t));

    let burn_duration = time
        .clone()
        .and_then(|t| endpoints(t, window.first, "time"))
        .map(|(t0, t1)| t1 - t0);

    let total_impulse = ordered_time
        .clone()
        .and_then(|t| thrust.clone().map(|f| (t, f)))
        .and_then(|(t, f)| trapezoid(t, f, window.first, "thrust"));

    let weight_delta = weight
        .clone()
        .and_then(|w| endpoints(w, window.first, "weight"))
        .map(|(w0, w1)| w1 - w0);

    let average_mass_flow = ordered_time
        .clone()
        .and_then(|t| endpoints(t, window.first, "time"))
        .and_then(|(t0, t1)| {
            let dw = weight_delta.clone()?;
            let duration = t1 - t0;
            if duration <= 0.0 {
                return Err(MetricError::ZeroDuration);
            }
            Ok(dw.abs() / duration)
        });

    let regressed_mass_flow = ordered_time
        .clone()
        .and_then(|t| weight.clone().map(|w| (t, w)))
        .and_then(|(t, w)| linear_slope(t, w, "weight"))
        .map(|slope| -slope);

    Ok(ComputedMetrics {
        window,
        peak_thrust: thrust.clone().and_then(|f| peak(f, "thrust")),
        mean_thrust: thrust.and_then(|f| mean(f, "thrust")),
        peak_pressure: pressure.clone().and_then(|p| peak(p, "pressure")),
        mean_pressure: pressure.and_then(|p| mean(p, "pressure")),
        burn_duration,
        total_impulse,
        weight_delta,
        average_mass_flow,
        regressed_mass_flow,
    })
}

fn role_column<'a>(
    dataset: &'a Dataset,
    mapping: &RoleMapping,
    window: &Window,
    role: Role,
) -> MetricsResult<&'a [Option<f64>]> {
    let header = mapping.require(role)?;
    Ok(window.slice(dataset.column(header)?))
}

/// Mean of any column over the selected window.
pub fn window_mean(
    dataset: &Dataset,
    header: &str,
    selection: Option<&Selection>,
) -> MetricsResult<f64> {
    let window = Window::resolve(selection, dataset.row_count())?;
    mean(window.slice(dataset.column(header)?), "column")
}
