//! Session configuration: keyword table, column units and venturi definitions.
//!
//! Loaded from YAML or JSON. Every field has a default, so a config file only
//! needs to name what differs.

use std::path::Path;

use hf_core::units::{MassUnit, PressureUnit, kg_per_m3, m};
use hf_flow::{FlowCalcResult, FlowError, Propellant, VenturiParameters, find_preset};
use hf_roles::{KeywordTable, Role};
use serde::{Deserialize, Serialize};

use crate::error::SessionResult;

/// Units of the raw numbers in the dataset columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnUnits {
    pub pressure: PressureUnit,
    pub mass: MassUnit,
}

fn unity() -> f64 {
    1.0
}

/// One venturi as written in a config file (SI lengths).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenturiDef {
    /// Preset name used when `density_kg_m3` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_kg_m3: Option<f64>,
    pub upstream_diameter_m: f64,
    pub throat_diameter_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cd: Option<f64>,
    #[serde(default = "unity")]
    pub expansion_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downstream_role: Option<Role>,
}

impl VenturiDef {
    pub fn new(density_kg_m3: f64, upstream_diameter_m: f64, throat_diameter_m: f64) -> Self {
        Self {
            fluid: None,
            density_kg_m3: Some(density_kg_m3),
            upstream_diameter_m,
            throat_diameter_m,
            cd: None,
            expansion_factor: 1.0,
            upstream_role: None,
            downstream_role: None,
        }
    }

    pub fn with_cd(mut self, cd: f64) -> Self {
        self.cd = Some(cd);
        self
    }

    pub fn density_kg_m3(&self) -> FlowCalcResult<f64> {
        if let Some(rho) = self.density_kg_m3 {
            return Ok(rho);
        }
        let name = self.fluid.as_deref().ok_or_else(|| FlowError::MissingInput {
            what: "venturi fluid density or fluid name".to_string(),
        })?;
        find_preset(name)
            .map(|p| p.density_kg_m3)
            .ok_or_else(|| FlowError::InvalidParameter {
                what: format!("unknown fluid '{name}'"),
            })
    }

    /// Validated calculator parameters.
    pub fn to_parameters(&self) -> FlowCalcResult<VenturiParameters> {
        let mut params = VenturiParameters::new(
            kg_per_m3(self.density_kg_m3()?),
            m(self.upstream_diameter_m),
            m(self.throat_diameter_m),
        )?
        .with_expansion_factor(self.expansion_factor)?;
        if let Some(cd) = self.cd {
            params = params.with_cd(cd)?;
        }
        Ok(params)
    }

    /// (upstream, downstream) pressure roles, defaulting per propellant.
    pub fn taps(&self, propellant: Propellant) -> (Role, Role) {
        let (up, down) = default_taps(propellant);
        (
            self.upstream_role.unwrap_or(up),
            self.downstream_role.unwrap_or(down),
        )
    }
}

pub fn default_taps(propellant: Propellant) -> (Role, Role) {
    match propellant {
        Propellant::Oxidizer => (Role::FeedPressureA, Role::FeedPressureB),
        Propellant::Fuel => (Role::FeedPressureC, Role::FeedPressureD),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub keywords: KeywordTable,
    pub units: ColumnUnits,
    pub oxidizer: Option<VenturiDef>,
    pub fuel: Option<VenturiDef>,
    /// Propellant drained from the weighed tank; its venturi gets CdA solved
    /// from the regressed mass flow.
    pub weighed_propellant: Option<Propellant>,
    /// Default moving-average window for flow series; `None` or 1 disables.
    pub smoothing_window: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordTable::default(),
            units: ColumnUnits::default(),
            oxidizer: None,
            fuel: None,
            weighed_propellant: Some(Propellant::Oxidizer),
            smoothing_window: None,
        }
    }
}

impl SessionConfig {
    pub fn venturi(&self, propellant: Propellant) -> Option<&VenturiDef> {
        match propellant {
            Propellant::Oxidizer => self.oxidizer.as_ref(),
            Propellant::Fuel => self.fuel.as_ref(),
        }
    }

    pub fn venturi_mut(&mut self, propellant: Propellant) -> &mut Option<VenturiDef> {
        match propellant {
            Propellant::Oxidizer => &mut self.oxidizer,
            Propellant::Fuel => &mut self.fuel,
        }
    }

    /// Check that every configured venturi yields valid parameters.
    pub fn validate(&self) -> SessionResult<()> {
        for propellant in Propellant::ALL {
            if let Some(def) = self.venturi(propellant) {
                def.to_parameters()?;
            }
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> SessionResult<Self> {
        let config: SessionConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> SessionResult<Self> {
        let config: SessionConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> SessionResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

pub fn load_yaml(path: &Path) -> SessionResult<SessionConfig> {
    let content = std::fs::read_to_string(path)?;
    SessionConfig::from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, config: &SessionConfig) -> SessionResult<()> {
    config.validate()?;
    std::fs::write(path, config.to_yaml_string()?)?;
    Ok(())
}

pub fn load_json(path: &Path) -> SessionResult<SessionConfig> {
    let content = std::fs::read_to_string(path)?;
    SessionConfig::from_json_str(&content)
}

pub fn save_json(path: &Path, config: &SessionConfig) -> SessionResult<()> {
    config.validate()?;
    std::fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}
