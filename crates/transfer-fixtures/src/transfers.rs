//! Transfer form fixtures.
//!
//! Each entry holds the raw strings a user would type into the transfer
//! form. Mode and date are chosen by the scenario, not the fixture.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::FixtureError;

/// Raw transfer form values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferFixture {
    /// Beneficiary display name.
    pub beneficiary: String,
    /// Account identifier as typed.
    pub iban: String,
    /// Free-text reference.
    pub label: String,
    /// Amount as typed, unparsed.
    pub amount: String,
}

/// Transfer fixtures keyed by fixture name (for example `validInstant`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferFixtures {
    entries: BTreeMap<String, TransferFixture>,
}

impl TransferFixtures {
    /// Parses transfer fixtures from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::ParseError`] if the JSON is malformed or an
    /// entry lacks one of the form fields.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let entries: BTreeMap<String, TransferFixture> =
            serde_json::from_str(json).map_err(|e| FixtureError::ParseError {
                message: e.to_string(),
            })?;
        Ok(Self { entries })
    }

    /// Loads transfer fixtures from a JSON file.
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

    /// Looks up a fixture by key.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::UnknownTransfer`] if no entry exists.
    pub fn get(&self, key: &str) -> Result<&TransferFixture, FixtureError> {
        self.entries
            .get(key)
            .ok_or_else(|| FixtureError::UnknownTransfer {
                key: key.to_owned(),
            })
    }

    /// Iterates over fixture keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const TRANSFERS_JSON: &str = r#"{
        "validInstant": {
            "beneficiary": "Alice GmbH",
            "iban": "DE89370400440532013000",
            "label": "Invoice",
            "amount": "50.00"
        },
        "validScheduled": {
            "beneficiary": "InExtenso",
            "iban": "FR7630006000011234567890189",
            "label": "Scheduled Invoice",
            "amount": "42.00"
        }
    }"#;

    #[test]
    fn parses_entries_in_key_order() {
        let fixtures = TransferFixtures::from_json(TRANSFERS_JSON).expect("valid fixtures");
        let keys: Vec<&str> = fixtures.keys().collect();
        assert_eq!(keys, vec!["validInstant", "validScheduled"]);

        let scheduled = fixtures.get("validScheduled").expect("known key");
        assert_eq!(scheduled.beneficiary, "InExtenso");
        assert_eq!(scheduled.label, "Scheduled Invoice");
    }

    #[test]
    fn unknown_key_is_reported() {
        let fixtures = TransferFixtures::from_json(TRANSFERS_JSON).expect("valid fixtures");
        let err = fixtures.get("validLater").expect_err("unknown key");
        assert_eq!(
            err,
            FixtureError::UnknownTransfer {
                key: "validLater".to_owned()
            }
        );
    }

    #[test]
    fn entry_missing_amount_fails_parsing() {
        let json = r#"{"broken": {"beneficiary": "A", "iban": "B", "label": "C"}}"#;
        let err = TransferFixtures::from_json(json).expect_err("amount is required");
        assert!(matches!(err, FixtureError::ParseError { .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(TRANSFERS_JSON.as_bytes())
            .expect("write fixture");

        let fixtures = TransferFixtures::from_file(file.path()).expect("fixture file loads");
        assert_eq!(
            fixtures.get("validInstant").expect("known key").iban,
            "DE89370400440532013000"
        );
    }
}
