//! Driven port resolving role aliases.
//!
//! Callers may name the acting role directly (`Purchase Manager`) or through
//! an alias such as a fixture key (`admin`). The directory turns either into
//! a [`Role`].

use crate::domain::Role;

/// Port for turning a role alias into a role.
#[cfg_attr(test, mockall::automock)]
pub trait RoleDirectory: Send + Sync {
    /// Resolve `alias` to a role. Unknown aliases are not an error.
    fn resolve(&self, alias: &str) -> Role;
}

/// Directory that treats every alias as the role name itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughRoleDirectory;

impl RoleDirectory for PassthroughRoleDirectory {
    fn resolve(&self, alias: &str) -> Role {
        Role::new(alias)
    }
}
