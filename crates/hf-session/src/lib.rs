//! hf-session: interactive analysis of one test dataset.
//!
//! [`AnalysisSession`] owns the dataset, the role mapping, the selection
//! controller and both venturi calculators. Every final selection produces a
//! fresh [`AnalysisSnapshot`]; provisional (mid-drag) selections are computed
//! and returned but never stored.

pub mod config;
pub mod controller;
pub mod error;
pub mod session;

pub use config::{ColumnUnits, SessionConfig, VenturiDef};
pub use controller::{Emission, Interaction, SelectionController, SelectionState};
pub use error::{SessionError, SessionResult};
pub use session::{AnalysisSession, AnalysisSnapshot, FlowOutcome};
