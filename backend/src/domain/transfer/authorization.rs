//! Role-based permission to submit a transfer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assumed when none has been set.
pub const GUEST_ROLE: &str = "Guest";

/// Roles permitted to submit transfers. Matching is exact and case-sensitive.
pub const ALLOWED_ROLES: [&str; 2] = ["Administrator", "Purchase Manager"];

/// Acting role, as an opaque name.
///
/// An empty name becomes [`GUEST_ROLE`]; anything else is kept verbatim.
///
/// # Examples
/// ```
/// use bank_transfer::domain::Role;
///
/// assert_eq!(Role::new("").as_str(), "Guest");
/// assert_eq!(Role::new("Purchase Manager").as_str(), "Purchase Manager");
/// assert_eq!(Role::default(), Role::guest());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Role(String);

impl Role {
    /// Wrap a role name, defaulting empty input to the guest role.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            Self::guest()
        } else {
            Self(name)
        }
    }

    /// The guest role.
    pub fn guest() -> Self {
        Self(GUEST_ROLE.to_owned())
    }

    /// Borrow the role name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::guest()
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `role` may submit transfers.
///
/// # Examples
/// ```
/// use bank_transfer::domain::{Role, authorize};
///
/// assert!(authorize(&Role::new("Administrator")));
/// assert!(!authorize(&Role::new("administrator")));
/// assert!(!authorize(&Role::guest()));
/// ```
pub fn authorize(role: &Role) -> bool {
    ALLOWED_ROLES.contains(&role.as_str())
}
