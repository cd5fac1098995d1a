//! User fixtures and role alias resolution.
//!
//! The users fixture is a JSON object keyed by fixture name:
//!
//! ```json
//! { "admin": { "name": "Ada Admin", "role": "Administrator" } }
//! ```
//!
//! Scenarios refer to the acting role either by fixture key (`admin`) or by
//! role name (`Purchase Manager`). [`UserFixtures::resolve_role`] accepts
//! both and falls back to the alias itself, so unknown roles still reach the
//! authorization check verbatim.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::FixtureError;

/// A single user entry from the users fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserFixture {
    /// Optional display name, informational only.
    pub name: Option<String>,
    /// Role assigned to the user, if any.
    pub role: Option<String>,
}

/// Users fixture keyed by fixture name.
///
/// # Example
///
/// ```
/// use transfer_fixtures::UserFixtures;
///
/// let users = UserFixtures::from_json(
///     r#"{"pm": {"role": "Purchase Manager"}, "nobody": {}}"#,
/// )
/// .expect("valid users fixture");
///
/// assert_eq!(users.resolve_role("pm"), "Purchase Manager");
/// assert_eq!(users.resolve_role("Purchase Manager"), "Purchase Manager");
/// assert_eq!(users.resolve_role("nobody"), "nobody");
/// assert_eq!(users.resolve_role("Auditor"), "Auditor");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFixtures {
    users: BTreeMap<String, UserFixture>,
}

impl UserFixtures {
    /// Parses a users fixture from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::ParseError`] if the JSON is malformed or is not
    /// an object of user entries.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let users: BTreeMap<String, UserFixture> =
            serde_json::from_str(json).map_err(|e| FixtureError::ParseError {
                message: e.to_string(),
            })?;
        Ok(Self { users })
    }

    /// Loads a users fixture from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path).map_err(|e| FixtureError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents)
    }

    /// Resolves a role alias in three steps:
    ///
    /// 1. a fixture key whose user has a role yields that role;
    /// 2. a role some user already carries yields that role;
    /// 3. anything else is returned verbatim.
    ///
    /// Matching is exact and case-sensitive in every step.
    #[must_use]
    pub fn resolve_role(&self, alias: &str) -> String {
        self.role_for_key(alias)
            .or_else(|| self.has_role(alias).then_some(alias))
            .unwrap_or(alias)
            .to_owned()
    }

    fn role_for_key(&self, key: &str) -> Option<&str> {
        self.users.get(key).and_then(|user| user.role.as_deref())
    }

    fn has_role(&self, role: &str) -> bool {
        self.users
            .values()
            .any(|user| user.role.as_deref() == Some(role))
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    const USERS_JSON: &str = r#"{
        "admin": {"name": "Ada Admin", "role": "Administrator"},
        "purchaseManager": {"role": "Purchase Manager"},
        "guest": {"role": "Guest"},
        "intern": {"name": "No Role"}
    }"#;

    #[fixture]
    fn users() -> UserFixtures {
        UserFixtures::from_json(USERS_JSON).expect("valid users fixture")
    }

    #[rstest]
    #[case("admin", "Administrator")]
    #[case("purchaseManager", "Purchase Manager")]
    #[case("Purchase Manager", "Purchase Manager")]
    #[case("guest", "Guest")]
    #[case("intern", "intern")]
    #[case("Auditor", "Auditor")]
    #[case("", "")]
    fn resolves_aliases(users: UserFixtures, #[case] alias: &str, #[case] expected: &str) {
        assert_eq!(users.resolve_role(alias), expected);
    }

    #[rstest]
    #[case("Administrator", true)]
    #[case("Purchase Manager", true)]
    #[case("administrator", false)]
    #[case("admin", false)]
    #[case(" Administrator", false)]
    fn role_values_are_matched_exactly(
        users: UserFixtures,
        #[case] role: &str,
        #[case] known: bool,
    ) {
        assert_eq!(users.has_role(role), known);
    }

    #[rstest]
    fn key_lookup_wins_over_role_values() {
        let users = UserFixtures::from_json(
            r#"{"Administrator": {"role": "Guest"}, "boss": {"role": "Administrator"}}"#,
        )
        .expect("valid users fixture");
        assert_eq!(users.resolve_role("Administrator"), "Guest");
        assert_eq!(users.resolve_role("boss"), "Administrator");
    }

    #[test]
    fn rejects_non_object_json() {
        let err = UserFixtures::from_json("[]").expect_err("array is not a users fixture");
        assert!(matches!(err, FixtureError::ParseError { .. }));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let path = Path::new("/definitely/not/here/users.json");
        let err = UserFixtures::from_file(path).expect_err("missing file must fail");
        assert!(matches!(err, FixtureError::IoError { .. }));
    }
}
