//! Error types for metric computation.

use hf_data::DataError;
use hf_roles::{Role, RoleError};
use serde::Serialize;
use thiserror::Error;

pub type MetricsResult<T> = Result<T, MetricError>;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum MetricError {
    #[error("No column assigned to role '{role}'")]
    UnassignedRole { role: Role },

    #[error("Time is not strictly increasing at row {row}")]
    NonMonotonicTime { row: usize },

    #[error("Missing {what} sample at row {row}")]
    MissingSample { what: &'static str, row: usize },

    #[error("No {what} samples in window")]
    NoData { what: &'static str },

    #[error("Zero elapsed time in window")]
    ZeroDuration,

    #[error("Need at least {needed} samples for {what}, got {got}")]
    InsufficientSamples {
        what: &'static str,
        needed: usize,
        got: usize,
    },

    #[error("Invalid selection: {reason}")]
    InvalidSelection { reason: String },

    #[error("Unknown column: {header}")]
    UnknownHeader { header: String },
}

impl From<RoleError> for MetricError {
    fn from(e: RoleError) -> Self {
        match e {
            RoleError::UnassignedRole { role } => MetricError::UnassignedRole { role },
            RoleError::HeaderClaimed { header, .. } | RoleError::UnknownHeader { header } => {
                MetricError::UnknownHeader { header }
            }
        }
    }
}

impl From<DataError> for MetricError {
    fn from(e: DataError) -> Self {
        match e {
            DataError::UnknownHeader { header } => MetricError::UnknownHeader { header },
            DataError::InvalidSelection { reason } => MetricError::InvalidSelection { reason },
            other => MetricError::InvalidSelection {
                reason: other.to_string(),
            },
        }
    }
}
