//! Bank transfer candidates and the submission decision rules.
//!
//! A [`TransferCandidate`] is the raw record read from the transfer form. The
//! decision engine runs in a fixed order: [`validate`] collects every field
//! error, [`authorize`] checks the acting [`Role`] only when the candidate is
//! well-formed, and [`resolve`] folds both into an [`Outcome`].
//!
//! All functions here are pure. "Today" is passed in by the caller so the
//! rules stay deterministic; [`crate::domain::TransferDesk`] reads it from a
//! clock.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod authorization;
mod outcome;
mod schedule;
#[cfg(test)]
mod tests;
mod validation;

pub use authorization::{ALLOWED_ROLES, GUEST_ROLE, Role, authorize};
pub use outcome::{
    ACCESS_DENIED_MESSAGE, INVALID_MESSAGE_PREFIX, Outcome, OutcomeKind, SUCCESS_MESSAGE, resolve,
};
pub use schedule::{
    ISO_DATE_FORMAT, MAX_SCHEDULE_DAYS, MIN_SCHEDULE_DAYS, SchedulePosition, ScheduleWindow,
};
pub use validation::{
    AMOUNT_MAX, AMOUNT_MIN, IBAN_MAX_LEN, IBAN_MIN_LEN, LABEL_MAX_LEN, TransferField,
    TransferValidationError, validate,
};

/// How the transfer is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferMode {
    /// Executed straight away; the date field is irrelevant.
    #[default]
    Instant,
    /// Executed on a future date inside the schedule window.
    Scheduled,
}

impl TransferMode {
    /// Stable lowercase name, as sent by the form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Scheduled => "scheduled",
        }
    }

    /// Whether the date field takes part in validation.
    pub const fn requires_date(self) -> bool {
        matches!(self, Self::Scheduled)
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a transfer mode from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transfer mode '{value}'; expected instant|scheduled")]
pub struct ParseTransferModeError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for TransferMode {
    type Err = ParseTransferModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "instant" => Ok(Self::Instant),
            "scheduled" => Ok(Self::Scheduled),
            _ => Err(ParseTransferModeError {
                value: value.to_owned(),
            }),
        }
    }
}

/// Transfer record as entered on the form, before any rule has run.
///
/// Fields hold the raw strings; parsing of the amount and date happens during
/// validation so that malformed input becomes a validation error rather than
/// a construction failure.
///
/// # Examples
/// ```
/// use bank_transfer::domain::{TransferCandidate, TransferMode};
///
/// let candidate = TransferCandidate::instant(
///     "Alice GmbH",
///     "DE89370400440532013000",
///     "Invoice",
///     "50.00",
/// );
/// assert_eq!(candidate.mode, TransferMode::Instant);
///
/// let scheduled = candidate.scheduled_on("2026-11-02");
/// assert_eq!(scheduled.mode, TransferMode::Scheduled);
/// assert_eq!(scheduled.date.as_deref(), Some("2026-11-02"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCandidate {
    /// Display name of the payee.
    pub beneficiary: String,
    /// Account identifier, expected to be alphanumeric.
    pub iban: String,
    /// Free-text reference.
    pub label: String,
    /// Amount exactly as entered.
    pub amount: String,
    /// Execution mode.
    pub mode: TransferMode,
    /// Execution date (`YYYY-MM-DD`); only read for scheduled transfers.
    pub date: Option<String>,
}

impl TransferCandidate {
    /// Build an instant transfer with no date.
    pub fn instant(
        beneficiary: impl Into<String>,
        iban: impl Into<String>,
        label: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            beneficiary: beneficiary.into(),
            iban: iban.into(),
            label: label.into(),
            amount: amount.into(),
            mode: TransferMode::Instant,
            date: None,
        }
    }

    /// Switch to scheduled mode on the given date.
    #[must_use]
    pub fn scheduled_on(self, date: impl Into<String>) -> Self {
        Self {
            mode: TransferMode::Scheduled,
            date: Some(date.into()),
            ..self
        }
    }

    /// Replace the execution mode, keeping any date as is.
    #[must_use]
    pub fn with_mode(self, mode: TransferMode) -> Self {
        Self { mode, ..self }
    }
}
