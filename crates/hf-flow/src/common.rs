//! Common helpers for flow calculations.

use std::f64::consts::PI;

use hf_core::numeric::{ensure_finite, ensure_positive};
use hf_core::units::{Area, Length, m2};

use crate::error::{FlowCalcResult, FlowError};

/// Non-finite intermediate values are reported as non-physical.
pub fn check_finite(value: f64, what: &'static str) -> FlowCalcResult<()> {
    ensure_finite(value, what)?;
    Ok(())
}

/// Require `value > 0`, reporting `what` as a geometry violation.
pub fn positive_geometry(value: f64, what: &'static str) -> FlowCalcResult<f64> {
    ensure_positive(value, what).map_err(|e| FlowError::InvalidGeometry {
        what: e.to_string(),
    })
}

/// Require `value > 0`, reporting `what` as a parameter violation.
pub fn positive_parameter(value: f64, what: &'static str) -> FlowCalcResult<f64> {
    ensure_positive(value, what).map_err(|e| FlowError::InvalidParameter {
        what: e.to_string(),
    })
}

/// Circular cross-section area for a diameter.
pub fn circle_area(diameter: Length) -> Area {
    let r = diameter.value / 2.0;
    m2(PI * r * r)
}
