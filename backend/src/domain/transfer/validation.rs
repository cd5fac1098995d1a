//! Field rules for transfer candidates.
//!
//! Each field runs its rules in a fixed order and stops at the first failure,
//! so a field contributes at most one error. Fields are always checked in the
//! order beneficiary, iban, label, amount, date.

use std::fmt;

use chrono::NaiveDate;

use super::schedule::{SchedulePosition, ScheduleWindow, parse_form_date};
use super::TransferCandidate;

/// Shortest accepted IBAN, in characters.
pub const IBAN_MIN_LEN: usize = 14;
/// Longest accepted IBAN, in characters.
pub const IBAN_MAX_LEN: usize = 34;
/// Longest accepted label, in characters.
pub const LABEL_MAX_LEN: usize = 255;
/// Smallest accepted amount.
pub const AMOUNT_MIN: f64 = 0.01;
/// Largest accepted amount.
pub const AMOUNT_MAX: f64 = 100_000.0;

/// Form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransferField {
    /// Payee display name.
    Beneficiary,
    /// Account identifier.
    Iban,
    /// Free-text reference.
    Label,
    /// Amount to transfer.
    Amount,
    /// Execution date of a scheduled transfer.
    Date,
}

impl TransferField {
    /// Lowercase field name as used on the form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beneficiary => "beneficiary",
            Self::Iban => "iban",
            Self::Label => "label",
            Self::Amount => "amount",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for TransferField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated field rule.
///
/// The `Display` text is the message shown to the person filling the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TransferValidationError {
    /// Beneficiary is blank.
    #[error("Beneficiary required")]
    BeneficiaryRequired,
    /// IBAN is empty.
    #[error("IBAN required")]
    IbanRequired,
    /// IBAN contains something other than ASCII letters and digits.
    #[error("IBAN alphanumeric")]
    IbanAlphanumeric,
    /// IBAN length falls outside the accepted range.
    #[error("IBAN length")]
    IbanLength,
    /// Label is empty.
    #[error("Label required")]
    LabelRequired,
    /// Label has disallowed characters or is too long.
    #[error("Label invalid")]
    LabelInvalid,
    /// Amount is empty or not a number.
    #[error("Amount required")]
    AmountRequired,
    /// Amount falls outside the accepted range.
    #[error("Amount range")]
    AmountRange,
    /// Scheduled transfer without a usable date.
    #[error("Date required")]
    DateRequired,
    /// Scheduled date before tomorrow.
    #[error("Date too early")]
    DateTooEarly,
    /// Scheduled date more than 90 days ahead.
    #[error("Date too late")]
    DateTooLate,
}

impl TransferValidationError {
    /// Stable machine-readable code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::BeneficiaryRequired => "beneficiary_required",
            Self::IbanRequired => "iban_required",
            Self::IbanAlphanumeric => "iban_alphanumeric",
            Self::IbanLength => "iban_length",
            Self::LabelRequired => "label_required",
            Self::LabelInvalid => "label_invalid",
            Self::AmountRequired => "amount_required",
            Self::AmountRange => "amount_range",
            Self::DateRequired => "date_required",
            Self::DateTooEarly => "date_too_early",
            Self::DateTooLate => "date_too_late",
        }
    }

    /// Field the rule belongs to.
    pub const fn field(self) -> TransferField {
        match self {
            Self::BeneficiaryRequired => TransferField::Beneficiary,
            Self::IbanRequired | Self::IbanAlphanumeric | Self::IbanLength => TransferField::Iban,
            Self::LabelRequired | Self::LabelInvalid => TransferField::Label,
            Self::AmountRequired | Self::AmountRange => TransferField::Amount,
            Self::DateRequired | Self::DateTooEarly | Self::DateTooLate => TransferField::Date,
        }
    }
}

/// Check every field of `candidate` and collect the failures.
///
/// `today` anchors the schedule window; it is ignored for instant transfers.
/// An empty result means the candidate is well-formed.
///
/// # Examples
/// ```
/// use bank_transfer::domain::{TransferCandidate, TransferValidationError, validate};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
/// let candidate = TransferCandidate::instant("", "DE89!", "Invoice", "0");
///
/// assert_eq!(
///     validate(&candidate, today),
///     vec![
///         TransferValidationError::BeneficiaryRequired,
///         TransferValidationError::IbanAlphanumeric,
///         TransferValidationError::AmountRange,
///     ]
/// );
/// ```
pub fn validate(candidate: &TransferCandidate, today: NaiveDate) -> Vec<TransferValidationError> {
    [
        check_beneficiary(&candidate.beneficiary),
        check_iban(&candidate.iban),
        check_label(&candidate.label),
        check_amount(&candidate.amount),
        check_date(candidate, today),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn check_beneficiary(beneficiary: &str) -> Option<TransferValidationError> {
    beneficiary
        .trim()
        .is_empty()
        .then_some(TransferValidationError::BeneficiaryRequired)
}

fn check_iban(iban: &str) -> Option<TransferValidationError> {
    if iban.is_empty() {
        Some(TransferValidationError::IbanRequired)
    } else if !iban.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(TransferValidationError::IbanAlphanumeric)
    } else if !(IBAN_MIN_LEN..=IBAN_MAX_LEN).contains(&iban.len()) {
        Some(TransferValidationError::IbanLength)
    } else {
        None
    }
}

fn check_label(label: &str) -> Option<TransferValidationError> {
    if label.is_empty() {
        return Some(TransferValidationError::LabelRequired);
    }
    let allowed = label.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ');
    (!allowed || label.len() > LABEL_MAX_LEN).then_some(TransferValidationError::LabelInvalid)
}

fn check_amount(amount: &str) -> Option<TransferValidationError> {
    let Some(value) = parse_amount(amount) else {
        return Some(TransferValidationError::AmountRequired);
    };
    (!(AMOUNT_MIN..=AMOUNT_MAX).contains(&value)).then_some(TransferValidationError::AmountRange)
}

/// Parse the amount as typed.
///
/// Follows browser number conversion of form input: surrounding whitespace is
/// ignored and a whitespace-only value reads as zero; `0x`, `0o` and `0b`
/// prefixes select a radix; `Infinity` is the only spelled-out value. An
/// empty value or anything else that is not a number yields `None`.
fn parse_amount(amount: &str) -> Option<f64> {
    if amount.is_empty() {
        return None;
    }
    let trimmed = amount.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }
    let (sign, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, trimmed)
    };
    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }
    let decimal_syntax = !unsigned.starts_with(['+', '-'])
        && unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal_syntax {
        return None;
    }
    unsigned.parse::<f64>().ok().map(|value| sign * value)
}

/// Unsigned `0x`/`0o`/`0b` literal. `None` when `raw` has no radix prefix;
/// `Some(None)` when the prefix is followed by invalid digits.
fn parse_radix_literal(raw: &str) -> Option<Option<f64>> {
    let radix = match raw.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = raw.get(2..)?;
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    }))
}

fn check_date(candidate: &TransferCandidate, today: NaiveDate) -> Option<TransferValidationError> {
    if !candidate.mode.requires_date() {
        return None;
    }
    let Some(date) = candidate.date.as_deref().and_then(parse_form_date) else {
        return Some(TransferValidationError::DateRequired);
    };
    match ScheduleWindow::starting_from(today).position(date) {
        SchedulePosition::TooEarly => Some(TransferValidationError::DateTooEarly),
        SchedulePosition::TooLate => Some(TransferValidationError::DateTooLate),
        SchedulePosition::Within => None,
    }
}
