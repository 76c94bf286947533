use thiserror::Error;

pub type HfResult<T> = Result<T, HfError>;

/// Scalar validation failures shared by the analysis crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HfError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be positive (got {value})")]
    NonPositive { what: &'static str, value: f64 },
}
