//! hf-flow: venturi and injector flow calculations for feed-system tests.
//!
//! Provides:
//! - [`FlowCalculator`]: one venturi algorithm, configured per propellant line
//!   (oxidizer, fuel) with its own [`VenturiParameters`]
//! - injector CdA / set-pressure relations ([`orifice`])
//! - common test fluid densities ([`fluids`])
//!
//! # Example
//!
//! ```
//! use hf_core::units::{inches, kg_per_m3, psi};
//! use hf_flow::{FlowCalculator, VenturiParameters};
//!
//! let params = VenturiParameters::new(kg_per_m3(1141.0), inches(0.5), inches(0.25))
//!     .unwrap()
//!     .with_cd(0.98)
//!     .unwrap();
//! let ox = FlowCalculator::oxidizer(params);
//!
//! let result = ox.mass_flow(psi(600.0), psi(450.0)).unwrap();
//! println!("LOX flow: {:.3} kg/s", result.mass_flow.value);
//! ```

pub mod common;
pub mod error;
pub mod fluids;
pub mod orifice;
pub mod venturi;

pub use error::{FlowCalcResult, FlowError};
pub use fluids::{FluidPreset, filter_presets, find_preset, presets};
pub use venturi::{FlowCalculator, FlowMode, FlowResult, Propellant, VenturiParameters};
