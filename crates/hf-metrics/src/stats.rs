//! Series statistics over sparse (`Option<f64>`) samples.
//!
//! `offset` arguments are the absolute row index of `values[0]`, so errors
//! point at dataset rows rather than window positions. Non-finite samples are
//! treated as missing.

use crate::error::{MetricError, MetricsResult};

/// Finite samples of a series.
pub fn present(values: &[Option<f64>]) -> impl Iterator<Item = f64> + '_ {
    values.iter().flatten().copied().filter(|v| v.is_finite())
}

fn sample(values: &[Option<f64>], idx: usize) -> Option<f64> {
    values.get(idx).copied().flatten().filter(|v| v.is_finite())
}

pub fn peak(values: &[Option<f64>], what: &'static str) -> MetricsResult<f64> {
    present(values)
        .reduce(f64::max)
        .ok_or(MetricError::NoData { what })
}

pub fn mean(values: &[Option<f64>], what: &'static str) -> MetricsResult<f64> {
    let (sum, count) = present(values).fold((0.0, 0_usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return Err(MetricError::NoData { what });
    }
    Ok(sum / count as f64)
}

/// First and last samples of a window; both must be present.
pub fn endpoints(
    values: &[Option<f64>],
    offset: usize,
    what: &'static str,
) -> MetricsResult<(f64, f64)> {
    if values.is_empty() {
        return Err(MetricError::NoData { what });
    }
    let last = values.len() - 1;
    let first_v = sample(values, 0).ok_or(MetricError::MissingSample { what, row: offset })?;
    let last_v = sample(values, last).ok_or(MetricError::MissingSample {
        what,
        row: offset + last,
    })?;
    Ok((first_v, last_v))
}

/// Every time sample present and strictly greater than the previous one.
pub fn require_increasing(times: &[Option<f64>], offset: usize) -> MetricsResult<()> {
    let mut prev: Option<f64> = None;
    for idx in 0..times.len() {
        let t = sample(times, idx).ok_or(MetricError::MissingSample {
            what: "time",
            row: offset + idx,
        })?;
        if let Some(p) = prev {
            if t <= p {
                return Err(MetricError::NonMonotonicTime { row: offset + idx });
            }
        }
        prev = Some(t);
    }
    Ok(())
}

/// Trapezoidal ∫ values dt. Time must already be known to be increasing.
pub fn trapezoid(
    times: &[Option<f64>],
    values: &[Option<f64>],
    offset: usize,
    what: &'static str,
) -> MetricsResult<f64> {
    let mut total = 0.0;
    for idx in 1..times.len().min(values.len()) {
        let (Some(t0), Some(t1)) = (sample(times, idx - 1), sample(times, idx)) else {
            return Err(MetricError::MissingSample {
                what: "time",
                row: offset + idx,
            });
        };
        let y0 = sample(values, idx - 1).ok_or(MetricError::MissingSample {
            what,
            row: offset + idx - 1,
        })?;
        let y1 = sample(values, idx).ok_or(MetricError::MissingSample {
            what,
            row: offset + idx,
        })?;
        total += 0.5 * (y0 + y1) * (t1 - t0);
    }
    Ok(total)
}

/// Least-squares slope of `values` against `times`, skipping unpaired samples.
pub fn linear_slope(
    times: &[Option<f64>],
    values: &[Option<f64>],
    what: &'static str,
) -> MetricsResult<f64> {
    let pairs: Vec<(f64, f64)> = (0..times.len().min(values.len()))
        .filter_map(|idx| Some((sample(times, idx)?, sample(values, idx)?)))
        .collect();
    if pairs.len() < 2 {
        return Err(MetricError::InsufficientSamples {
            what,
            needed: 2,
            got: pairs.len(),
        });
    }

    let n = pairs.len() as f64;
    let t_mean = pairs.iter().map(|(t, _)| t).sum::<f64>() / n;
    let y_mean = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;
    let (sxy, sxx) = pairs.iter().fold((0.0, 0.0), |(sxy, sxx), (t, y)| {
        let dt = t - t_mean;
        (sxy + dt * (y - y_mean), sxx + dt * dt)
    });
    if sxx == 0.0 {
        return Err(MetricError::ZeroDuration);
    }
    Ok(sxy / sxx)
}

/// Centred moving average. Edges average over the samples that exist,
/// missing samples are skipped, and a position with no samples stays `None`.
pub fn moving_average(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window <= 1 {
        return values.to_vec();
    }
    let half_lo = (window - 1) / 2;
    let half_hi = window / 2;
    (0..values.len())
        .map(|idx| {
            let lo = idx.saturating_sub(half_lo);
            let hi = (idx + half_hi).min(values.len() - 1);
            let (sum, count) = present(&values[lo..=hi])
                .fold((0.0, 0_usize), |(s, n), v| (s + v, n + 1));
            (count > 0).then(|| sum / count as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(v: &[f64]) -> Vec<Option<f64>> {
        v.iter().copied().map(Some).collect()
    }

    #[test]
    fn peak_and_mean_skip_missing() {
        let v = vec![Some(1.0), None, Some(5.0), Some(f64::NAN), Some(3.0)];
        assert_eq!(peak(&v, "x").unwrap(), 5.0);
        assert_eq!(mean(&v, "x").unwrap(), 3.0);
    }

    #[test]
    fn all_missing_is_no_data() {
        let v = vec![None, None];
        assert_eq!(peak(&v, "x"), Err(MetricError::NoData { what: "x" }));
        assert_eq!(mean(&v, "x"), Err(MetricError::NoData { what: "x" }));
    }

    #[test]
    fn increasing_check_reports_absolute_row() {
        let t = dense(&[0.0, 1.0, 1.0, 2.0]);
        assert_eq!(
            require_increasing(&t, 10),
            Err(MetricError::NonMonotonicTime { row: 12 })
        );
        assert!(require_increasing(&dense(&[0.0, 0.5, 2.0]), 0).is_ok());
    }

    #[test]
    fn trapezoid_of_ramp() {
        let t = dense(&[0.0, 1.0, 2.0]);
        let y = dense(&[0.0, 10.0, 20.0]);
        assert_eq!(trapezoid(&t, &y, 0, "y").unwrap(), 20.0);
        assert_eq!(trapezoid(&t[..1], &y[..1], 0, "y").unwrap(), 0.0);
    }

    #[test]
    fn trapezoid_flags_missing_value() {
        let t = dense(&[0.0, 1.0, 2.0]);
        let y = vec![Some(1.0), None, Some(1.0)];
        assert_eq!(
            trapezoid(&t, &y, 4, "thrust"),
            Err(MetricError::MissingSample {
                what: "thrust",
                row: 5
            })
        );
    }

    #[test]
    fn slope_of_draining_tank() {
        let t = dense(&[0.0, 1.0, 2.0, 3.0]);
        let w = dense(&[100.0, 98.0, 96.0, 94.0]);
        assert!((linear_slope(&t, &w, "weight").unwrap() + 2.0).abs() < 1e-12);
    }

    #[test]
    fn slope_needs_two_pairs() {
        let t = dense(&[0.0, 1.0]);
        let w = vec![Some(1.0), None];
        assert!(matches!(
            linear_slope(&t, &w, "weight"),
            Err(MetricError::InsufficientSamples { got: 1, .. })
        ));
    }

    #[test]
    fn moving_average_window_three() {
        let v = dense(&[1.0, 2.0, 3.0, 4.0]);
        let smoothed = moving_average(&v, 3);
        assert_eq!(
            smoothed,
            vec![Some(1.5), Some(2.0), Some(3.0), Some(3.5)]
        );
        assert_eq!(moving_average(&v, 1), v);
        assert_eq!(moving_average(&[None, None], 2), vec![None, None]);
    }
}
