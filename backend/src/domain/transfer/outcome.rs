//! Final decision for one submission attempt.

use std::fmt;

use chrono::NaiveDate;

use super::authorization::{Role, authorize};
use super::validation::{TransferValidationError, validate};
use super::TransferCandidate;

/// Message shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Transfer created successfully";
/// Message shown when the acting role may not submit.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied";
/// Prefix of the message listing validation failures.
pub const INVALID_MESSAGE_PREFIX: &str = "Invalid: ";

/// Category of an [`Outcome`], used for logging and response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The transfer was accepted.
    Success,
    /// At least one field rule failed.
    ValidationFailed,
    /// The role is not allowed to submit.
    AccessDenied,
}

impl OutcomeKind {
    /// Stable snake_case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ValidationFailed => "validation_failed",
            Self::AccessDenied => "access_denied",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving a candidate for a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Candidate is valid and the role is allowed.
    Success,
    /// Candidate failed validation; errors keep field order.
    ValidationFailed(Vec<TransferValidationError>),
    /// Candidate is valid but the role is not allowed.
    AccessDenied,
}

impl Outcome {
    /// Category of this outcome.
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success => OutcomeKind::Success,
            Self::ValidationFailed(_) => OutcomeKind::ValidationFailed,
            Self::AccessDenied => OutcomeKind::AccessDenied,
        }
    }

    /// Whether the submission was accepted.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Validation errors, empty unless validation failed.
    pub fn errors(&self) -> &[TransferValidationError] {
        match self {
            Self::ValidationFailed(errors) => errors,
            Self::Success | Self::AccessDenied => &[],
        }
    }

    /// Message for the person submitting the form.
    ///
    /// # Examples
    /// ```
    /// use bank_transfer::domain::{Outcome, TransferValidationError};
    ///
    /// let outcome = Outcome::ValidationFailed(vec![
    ///     TransferValidationError::IbanRequired,
    ///     TransferValidationError::AmountRange,
    /// ]);
    /// assert_eq!(outcome.message(), "Invalid: IBAN required, Amount range");
    /// assert_eq!(Outcome::AccessDenied.message(), "Access denied");
    /// ```
    pub fn message(&self) -> String {
        match self {
            Self::Success => SUCCESS_MESSAGE.to_owned(),
            Self::AccessDenied => ACCESS_DENIED_MESSAGE.to_owned(),
            Self::ValidationFailed(errors) => {
                let joined = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{INVALID_MESSAGE_PREFIX}{joined}")
            }
        }
    }
}

/// Decide the outcome of submitting `candidate` as `role` on `today`.
///
/// Validation always runs first; the role is only checked for well-formed
/// candidates.
///
/// # Examples
/// ```
/// use bank_transfer::domain::{Outcome, Role, TransferCandidate, resolve};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
/// let candidate = TransferCandidate::instant(
///     "Alice GmbH",
///     "DE89370400440532013000",
///     "Invoice",
///     "50.00",
/// );
///
/// assert_eq!(resolve(&candidate, &Role::new("Administrator"), today), Outcome::Success);
/// assert_eq!(resolve(&candidate, &Role::guest(), today), Outcome::AccessDenied);
/// ```
pub fn resolve(candidate: &TransferCandidate, role: &Role, today: NaiveDate) -> Outcome {
    let errors = validate(candidate, today);
    if !errors.is_empty() {
        return Outcome::ValidationFailed(errors);
    }
    if authorize(role) {
        Outcome::Success
    } else {
        Outcome::AccessDenied
    }
}
