//! Error types for role assignment.

use thiserror::Error;

use crate::role::Role;

pub type RoleResult<T> = Result<T, RoleError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoleError {
    #[error("No column assigned to role '{role}'")]
    UnassignedRole { role: Role },

    #[error("Column '{header}' is already assigned to role '{owner}'")]
    HeaderClaimed { header: String, owner: Role },

    #[error("Unknown column: {header}")]
    UnknownHeader { header: String },
}
