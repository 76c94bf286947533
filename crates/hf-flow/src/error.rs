//! Error types for flow calculations.

use hf_core::error::HfError;
use thiserror::Error;

/// Errors that can occur during flow calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: String },

    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: String },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Missing input: {what}")]
    MissingInput { what: String },
}

pub type FlowCalcResult<T> = Result<T, FlowError>;

impl FlowError {
    /// Geometry and parameter violations reject a request outright.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            FlowError::InvalidGeometry { .. } | FlowError::InvalidParameter { .. }
        )
    }
}

impl From<HfError> for FlowError {
    fn from(e: HfError) -> Self {
        match e {
            HfError::NonFinite { what, .. } => FlowError::NonPhysical { what },
            other => FlowError::InvalidParameter {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FlowError::InvalidGeometry {
            what: "beta >= 1".to_string(),
        };
        assert!(err.to_string().contains("beta"));
        assert!(err.is_rejection());
        assert!(!FlowError::NonPhysical { what: "x" }.is_rejection());
    }

    #[test]
    fn error_conversion() {
        let err: FlowError = HfError::NonFinite {
            what: "mass flow",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err, FlowError::NonPhysical { what: "mass flow" });
    }
}
