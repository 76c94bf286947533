//! Plain injector orifice relations (no approach-velocity correction).
//!
//! ṁ = CdA · sqrt(2 ρ ΔP), so for a target flow the manifold must sit
//! (ṁ / CdA)² / (2ρ) above the chamber.

use hf_core::units::{Area, Density, MassRate, Pressure, kgps, m2, pa};

use crate::common::{check_finite, positive_geometry, positive_parameter};
use crate::error::{FlowCalcResult, FlowError};

fn non_negative_drop(delta_p: Pressure) -> FlowCalcResult<f64> {
    check_finite(delta_p.value, "injector pressure drop")?;
    if delta_p.value < 0.0 {
        return Err(FlowError::InvalidGeometry {
            what: format!("injector pressure drop is negative ({} Pa)", delta_p.value),
        });
    }
    Ok(delta_p.value)
}

/// Effective injector area from a measured flow and pressure drop.
pub fn injector_cda(mass_flow: MassRate, density: Density, delta_p: Pressure) -> FlowCalcResult<Area> {
    check_finite(mass_flow.value, "injector mass flow")?;
    if mass_flow.value < 0.0 {
        return Err(FlowError::NonPhysical {
            what: "negative injector mass flow",
        });
    }
    let rho = positive_parameter(density.value, "fluid density")?;
    let dp = non_negative_drop(delta_p)?;
    if dp == 0.0 {
        return Err(FlowError::NonPhysical {
            what: "zero pressure drop across injector",
        });
    }
    Ok(m2(mass_flow.value / (2.0 * rho * dp).sqrt()))
}

pub fn injector_mass_flow(cda: Area, density: Density, delta_p: Pressure) -> FlowCalcResult<MassRate> {
    let cda = positive_geometry(cda.value, "injector CdA")?;
    let rho = positive_parameter(density.value, "fluid density")?;
    let dp = non_negative_drop(delta_p)?;
    Ok(kgps(cda * (2.0 * rho * dp).sqrt()))
}

/// Pressure drop needed to push `mass_flow` through `cda`.
pub fn required_delta_p(cda: Area, mass_flow: MassRate, density: Density) -> FlowCalcResult<Pressure> {
    let cda = positive_geometry(cda.value, "injector CdA")?;
    let rho = positive_parameter(density.value, "fluid density")?;
    check_finite(mass_flow.value, "target mass flow")?;
    let ratio = mass_flow.value / cda;
    Ok(pa(ratio * ratio / (2.0 * rho)))
}

/// Upstream set pressure for a target flow at a given manifold pressure.
pub fn required_set_pressure(
    cda: Area,
    mass_flow: MassRate,
    density: Density,
    manifold: Pressure,
) -> FlowCalcResult<Pressure> {
    check_finite(manifold.value, "manifold pressure")?;
    let dp = required_delta_p(cda, mass_flow, density)?;
    Ok(dp + manifold)
}
