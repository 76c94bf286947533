use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RoleError, RoleResult};
use crate::role::Role;

/// Role → raw header assignment. A header is owned by at most one role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleMapping {
    assignments: BTreeMap<Role, String>,
}

impl RoleMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, role: Role) -> Option<&str> {
        self.assignments.get(&role).map(String::as_str)
    }

    /// Header for `role`, or `UnassignedRole`.
    pub fn require(&self, role: Role) -> RoleResult<&str> {
        self.get(role).ok_or(RoleError::UnassignedRole { role })
    }

    pub fn role_of(&self, header: &str) -> Option<Role> {
        self.assignments
            .iter()
            .find(|(_, h)| h.as_str() == header)
            .map(|(role, _)| *role)
    }

    /// Point `role` at `header`, replacing any previous header of that role.
    ///
    /// Fails if a different role already owns the header.
    pub fn assign(&mut self, role: Role, header: impl Into<String>) -> RoleResult<()> {
        let header = header.into();
        if let Some(owner) = self.role_of(&header) {
            if owner != role {
                return Err(RoleError::HeaderClaimed { header, owner });
            }
        }
        self.assignments.insert(role, header);
        Ok(())
    }

    pub fn unassign(&mut self, role: Role) -> Option<String> {
        self.assignments.remove(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        self.assignments.iter().map(|(r, h)| (*r, h.as_str()))
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Roles of `roles` that have no header.
    pub fn unassigned<'a>(&'a self, roles: &'a [Role]) -> impl Iterator<Item = Role> + 'a {
        roles.iter().copied().filter(|r| self.get(*r).is_none())
    }
}
