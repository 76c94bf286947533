//! Venturi flow meter: mass flow from a measured pressure drop, or the
//! effective CdA from an independently measured mass flow.
//!
//! ṁ = Cd · Y · A_t · sqrt(2 ρ ΔP / (1 − β⁴)),  β = d_t / d_u

use core::fmt;

use hf_core::units::{Area, Density, Length, MassRate, Pressure, PressureUnit, kgps, m2, pa};
use serde::{Deserialize, Serialize};

use crate::common::{check_finite, circle_area, positive_geometry, positive_parameter};
use crate::error::{FlowCalcResult, FlowError};

/// Propellant line a calculator is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Propellant {
    Oxidizer,
    Fuel,
}

impl Propellant {
    pub const ALL: [Propellant; 2] = [Propellant::Oxidizer, Propellant::Fuel];
}

impl fmt::Display for Propellant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Propellant::Oxidizer => f.write_str("oxidizer"),
            Propellant::Fuel => f.write_str("fuel"),
        }
    }
}

/// Fluid and geometry of one venturi. Always valid once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VenturiParameters {
    density: Density,
    upstream_diameter: Length,
    throat_diameter: Length,
    cd: Option<f64>,
    expansion_factor: f64,
}

impl VenturiParameters {
    /// Validate density and geometry. Cd starts unknown, Y at 1 (liquids).
    pub fn new(
        density: Density,
        upstream_diameter: Length,
        throat_diameter: Length,
    ) -> FlowCalcResult<Self> {
        positive_parameter(density.value, "fluid density")?;
        let d_u = positive_geometry(upstream_diameter.value, "upstream diameter")?;
        let d_t = positive_geometry(throat_diameter.value, "throat diameter")?;
        if d_t >= d_u {
            return Err(FlowError::InvalidGeometry {
                what: format!(
                    "throat diameter ({d_t} m) must be smaller than upstream diameter ({d_u} m), beta = {:.4}",
                    d_t / d_u
                ),
            });
        }
        Ok(Self {
            density,
            upstream_diameter,
            throat_diameter,
            cd: None,
            expansion_factor: 1.0,
        })
    }

    /// Known discharge coefficient, in (0, 1].
    pub fn with_cd(mut self, cd: f64) -> FlowCalcResult<Self> {
        positive_parameter(cd, "discharge coefficient")?;
        if cd > 1.0 {
            return Err(FlowError::InvalidParameter {
                what: format!("discharge coefficient must not exceed 1 (got {cd})"),
            });
        }
        self.cd = Some(cd);
        Ok(self)
    }

    pub fn without_cd(mut self) -> Self {
        self.cd = None;
        self
    }

    /// Expansion factor Y; 1.0 for incompressible flow.
    pub fn with_expansion_factor(mut self, y: f64) -> FlowCalcResult<Self> {
        self.expansion_factor = positive_parameter(y, "expansion factor")?;
        Ok(self)
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn upstream_diameter(&self) -> Length {
        self.upstream_diameter
    }

    pub fn throat_diameter(&self) -> Length {
        self.throat_diameter
    }

    pub fn cd(&self) -> Option<f64> {
        self.cd
    }

    pub fn expansion_factor(&self) -> f64 {
        self.expansion_factor
    }

    pub fn beta(&self) -> f64 {
        self.throat_diameter.value / self.upstream_diameter.value
    }

    pub fn throat_area(&self) -> Area {
        circle_area(self.throat_diameter)
    }

    /// Y · sqrt(2ρ / (1 − β⁴)); multiply by CdA and sqrt(ΔP) to get ṁ.
    fn velocity_factor(&self) -> f64 {
        let beta4 = self.beta().powi(4);
        self.expansion_factor * (2.0 * self.density.value / (1.0 - beta4)).sqrt()
    }
}

/// Which unknown a [`FlowResult`] was solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowMode {
    /// ṁ from a known Cd
    MassFlow,
    /// Cd·A from a measured ṁ
    EffectiveArea,
}

/// Result of one venturi evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowResult {
    pub propellant: Propellant,
    pub mode: FlowMode,
    pub mass_flow: MassRate,
    /// Cd · A_throat
    pub cda: Area,
    pub cd: f64,
    pub delta_p: Pressure,
    pub beta: f64,
}

/// Venturi calculator for one propellant line.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowCalculator {
    propellant: Propellant,
    params: VenturiParameters,
}

impl FlowCalculator {
    pub fn new(propellant: Propellant, params: VenturiParameters) -> Self {
        Self { propellant, params }
    }

    pub fn oxidizer(params: VenturiParameters) -> Self {
        Self::new(Propellant::Oxidizer, params)
    }

    pub fn fuel(params: VenturiParameters) -> Self {
        Self::new(Propellant::Fuel, params)
    }

    pub fn propellant(&self) -> Propellant {
        self.propellant
    }

    pub fn params(&self) -> &VenturiParameters {
        &self.params
    }

    pub fn set_params(&mut self, params: VenturiParameters) {
        self.params = params;
    }

    fn delta_p(&self, upstream: Pressure, downstream: Pressure) -> FlowCalcResult<f64> {
        check_finite(upstream.value, "upstream pressure")?;
        check_finite(downstream.value, "downstream pressure")?;
        let dp = upstream.value - downstream.value;
        if dp < 0.0 {
            return Err(FlowError::InvalidGeometry {
                what: format!(
                    "{} venturi pressure drop is negative ({dp:.1} Pa): downstream exceeds upstream",
                    self.propellant
                ),
            });
        }
        Ok(dp)
    }

    /// Mass flow from a known discharge coefficient.
    pub fn mass_flow(&self, upstream: Pressure, downstream: Pressure) -> FlowCalcResult<FlowResult> {
        let dp = self.delta_p(upstream, downstream)?;
        let cd = self.params.cd.ok_or_else(|| FlowError::MissingInput {
            what: format!("{} venturi discharge coefficient", self.propellant),
        })?;

        let cda = cd * self.params.throat_area().value;
        let mdot = cda * self.params.velocity_factor() * dp.sqrt();
        check_finite(mdot, "mass flow rate")?;

        Ok(FlowResult {
            propellant: self.propellant,
            mode: FlowMode::MassFlow,
            mass_flow: kgps(mdot),
            cda: m2(cda),
            cd,
            delta_p: pa(dp),
            beta: self.params.beta(),
        })
    }

    /// Effective Cd·A (and Cd) from a measured mass flow.
    pub fn solve_cda(
        &self,
        upstream: Pressure,
        downstream: Pressure,
        measured: MassRate,
    ) -> FlowCalcResult<FlowResult> {
        let dp = self.delta_p(upstream, downstream)?;
        check_finite(measured.value, "measured mass flow")?;
        if measured.value < 0.0 {
            return Err(FlowError::NonPhysical {
                what: "negative measured mass flow",
            });
        }
        if dp == 0.0 {
            return Err(FlowError::NonPhysical {
                what: "zero pressure drop across venturi",
            });
        }

        let cda = measured.value / (self.params.velocity_factor() * dp.sqrt());
        check_finite(cda, "effective area")?;

        Ok(FlowResult {
            propellant: self.propellant,
            mode: FlowMode::EffectiveArea,
            mass_flow: measured,
            cda: m2(cda),
            cd: cda / self.params.throat_area().value,
            delta_p: pa(dp),
            beta: self.params.beta(),
        })
    }

    /// Per-sample mass flow (kg/s) for two raw pressure columns.
    ///
    /// Samples with a missing pressure or reversed flow are `None` rather
    /// than being forced to zero.
    pub fn mass_flow_series(
        &self,
        upstream: &[Option<f64>],
        downstream: &[Option<f64>],
        unit: PressureUnit,
    ) -> FlowCalcResult<Vec<Option<f64>>> {
        if self.params.cd.is_none() {
            return Err(FlowError::MissingInput {
                what: format!("{} venturi discharge coefficient", self.propellant),
            });
        }
        Ok(upstream
            .iter()
            .zip(downstream)
            .map(|(up, down)| {
                let (up, down) = ((*up)?, (*down)?);
                self.mass_flow(unit.to_pressure(up), unit.to_pressure(down))
                    .ok()
                    .map(|r| r.mass_flow.value)
            })
            .collect())
    }
}
