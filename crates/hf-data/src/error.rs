//! Error types for dataset construction and selection validation.

use thiserror::Error;

pub type DataResult<T> = Result<T, DataError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Row {row} does not match the header set: {detail}")]
    RaggedRow { row: usize, detail: String },

    #[error("Duplicate header: {header}")]
    DuplicateHeader { header: String },

    #[error("Column '{header}' has {len} values, expected {expected}")]
    LengthMismatch {
        header: String,
        len: usize,
        expected: usize,
    },

    #[error("Unknown header: {header}")]
    UnknownHeader { header: String },

    #[error("Invalid selection: {reason}")]
    InvalidSelection { reason: String },
}
