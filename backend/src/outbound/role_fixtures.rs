//! Role directory backed by a users fixture.

use transfer_fixtures::UserFixtures;

use crate::domain::Role;
use crate::domain::ports::RoleDirectory;

/// Resolves fixture keys such as `admin` to the role stored in the fixture.
///
/// Role names and unknown aliases pass through unchanged.
///
/// # Examples
/// ```
/// use bank_transfer::domain::ports::RoleDirectory;
/// use bank_transfer::outbound::role_fixtures::FixtureRoleDirectory;
/// use transfer_fixtures::UserFixtures;
///
/// let users = UserFixtures::from_json(r#"{"admin": {"role": "Administrator"}}"#)
///     .expect("valid fixture");
/// let directory = FixtureRoleDirectory::new(users);
///
/// assert_eq!(directory.resolve("admin").as_str(), "Administrator");
/// assert_eq!(directory.resolve("Auditor").as_str(), "Auditor");
/// ```
#[derive(Debug, Clone)]
pub struct FixtureRoleDirectory {
    users: UserFixtures,
}

impl FixtureRoleDirectory {
    /// Wrap a loaded users fixture.
    pub const fn new(users: UserFixtures) -> Self {
        Self { users }
    }
}

impl RoleDirectory for FixtureRoleDirectory {
    fn resolve(&self, alias: &str) -> Role {
        Role::new(self.users.resolve_role(alias))
    }
}
