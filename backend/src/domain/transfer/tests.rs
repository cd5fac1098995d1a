//! Unit tests for transfer validation, authorization, and outcome resolution.
//!
//! Dates are fixed so boundary cases do not depend on the wall clock.

use chrono::{Days, NaiveDate};
use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

#[fixture]
fn valid_instant() -> TransferCandidate {
    TransferCandidate::instant(
        "Alice GmbH",
        "DE89370400440532013000",
        "Invoice",
        "50.00",
    )
}

fn days_after(today: NaiveDate, days: u64) -> String {
    today
        .checked_add_days(Days::new(days))
        .expect("date in range")
        .format(ISO_DATE_FORMAT)
        .to_string()
}

fn yesterday(today: NaiveDate) -> String {
    today
        .checked_sub_days(Days::new(1))
        .expect("date in range")
        .format(ISO_DATE_FORMAT)
        .to_string()
}

#[rstest]
fn valid_instant_candidate_has_no_errors(valid_instant: TransferCandidate, today: NaiveDate) {
    assert!(validate(&valid_instant, today).is_empty());
}

#[rstest]
#[case("", TransferValidationError::BeneficiaryRequired)]
#[case("   ", TransferValidationError::BeneficiaryRequired)]
fn blank_beneficiary_is_required(
    valid_instant: TransferCandidate,
    today: NaiveDate,
    #[case] beneficiary: &str,
    #[case] expected: TransferValidationError,
) {
    let candidate = TransferCandidate {
        beneficiary: beneficiary.to_owned(),
        ..valid_instant
    };
    assert_eq!(validate(&candidate, today), vec![expected]);
}

#[rstest]
#[case("", Some(TransferValidationError::IbanRequired))]
#[case("DE89-3704-0044", Some(TransferValidationError::IbanAlphanumeric))]
#[case("DE89 370400440532013000", Some(TransferValidationError::IbanAlphanumeric))]
#[case("DE!", Some(TransferValidationError::IbanAlphanumeric))]
#[case("DE8937040044", Some(TransferValidationError::IbanLength))]
#[case("DE893704004405", None)]
#[case("ABCDEFGHIJ0123456789ABCDEFGHIJ0123", None)]
#[case("ABCDEFGHIJ0123456789ABCDEFGHIJ01234", Some(TransferValidationError::IbanLength))]
fn iban_rules_short_circuit_in_order(
    valid_instant: TransferCandidate,
    today: NaiveDate,
    #[case] iban: &str,
    #[case] expected: Option<TransferValidationError>,
) {
    let candidate = TransferCandidate {
        iban: iban.to_owned(),
        ..valid_instant
    };
    assert_eq!(validate(&candidate, today), expected.into_iter().collect::<Vec<_>>());
}

#[rstest]
#[case("", Some(TransferValidationError::LabelRequired))]
#[case("Invoice 42", None)]
#[case("Invoice #42", Some(TransferValidationError::LabelInvalid))]
#[case("Rechnung für März", Some(TransferValidationError::LabelInvalid))]
fn label_rules(
    valid_instant: TransferCandidate,
    today: NaiveDate,
    #[case] label: &str,
    #[case] expected: Option<TransferValidationError>,
) {
    let candidate = TransferCandidate {
        label: label.to_owned(),
        ..valid_instant
    };
    assert_eq!(validate(&candidate, today), expected.into_iter().collect::<Vec<_>>());
}

#[rstest]
#[case(LABEL_MAX_LEN, None)]
#[case(LABEL_MAX_LEN + 1, Some(TransferValidationError::LabelInvalid))]
fn label_length_limit(
    valid_instant: TransferCandidate,
    today: NaiveDate,
    #[case] len: usize,
    #[case] expected: Option<TransferValidationError>,
) {
    let candidate = TransferCandidate {
        label: "a".repeat(len),
        ..valid_instant
    };
    assert_eq!(validate(&candidate, today), expected.into_iter().collect::<Vec<_>>());
}

#[rstest]
#[case("0.01", None)]
#[case("100000", None)]
#[case(" 42.5 ", None)]
#[case("0.00", Some(TransferValidationError::AmountRange))]
#[case("100000.01", Some(TransferValidationError::AmountRange))]
#[case("-5", Some(TransferValidationError::AmountRange))]
#[case("", Some(TransferValidationError::AmountRequired))]
#[case("   ", Some(TransferValidationError::AmountRange))]
#[case("abc", Some(TransferValidationError::AmountRequired))]
#[case("NaN", Some(TransferValidationError::AmountRequired))]
fn amount_rules(
    valid_instant: TransferCandidate,
    today: NaiveDate,
    #[case] amount: &str,
    #[case] expected: Option<TransferValidationError>,
) {
    let candidate = TransferCandidate {
        amount: amount.to_owned(),
        ..valid_instant
    };
    assert_eq!(validate(&candidate, today), expected.into_iter().collect::<Vec<_>>());
}

#[rstest]
#[case("0x10", None)]
#[case("0X1F4", None)]
#[case("0b11", None)]
#[case("0o17", None)]
#[case("1e3", None)]
#[case("5.", None)]
#[case(".5", None)]
#[case("+12", None)]
#[case("Infinity", Some(TransferValidationError::AmountRange))]
#[case("-Infinity", Some(TransferValidationError::AmountRange))]
#[case("inf", Some(TransferValidationError::AmountRequired))]
#[case("infinity", Some(TransferValidationError::AmountRequired))]
#[case("0x", Some(TransferValidationError::AmountRequired))]
#[case("-0x10", Some(TransferValidationError::AmountRequired))]
#[case("--5", Some(TransferValidationError::AmountRequired))]
#[case("1_000", Some(TransferValidationError::AmountRequired))]
#[case("12abc", Some(TransferValidationError::AmountRequired))]
fn amount_follows_form_number_syntax(
    valid_instant: TransferCandidate,
    today: NaiveDate,
    #[case] amount: &str,
    #[case] expected: Option<TransferValidationError>,
) {
    let candidate = TransferCandidate {
        amount: amount.to_owned(),
        ..valid_instant
    };
    assert_eq!(validate(&candidate, today), expected.into_iter().collect::<Vec<_>>());
}

#[rstest]
#[case(0, Some(TransferValidationError::DateTooEarly))]
#[case(1, None)]
#[case(45, None)]
#[case(90, None)]
#[case(91, Some(TransferValidationError::DateTooLate))]
fn scheduled_date_window_is_inclusive(
    valid_instant: TransferCandidate,
    today: NaiveDate,
    #[case] offset: u64,
    #[case] expected: Option<TransferValidationError>,
) {
    let candidate = valid_instant.scheduled_on(days_after(today, offset));
    assert_eq!(validate(&candidate, today), expected.into_iter().collect::<Vec<_>>());
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("next tuesday"))]
#[case(Some("2026-02-30"))]
fn scheduled_without_usable_date_is_required(
    valid_instant: TransferCandidate,
    today: NaiveDate,
    #[case] date: Option<&str>,
) {
    let candidate = TransferCandidate {
        date: date.map(str::to_owned),
        ..valid_instant.with_mode(TransferMode::Scheduled)
    };
    assert_eq!(
        validate(&candidate, today),
        vec![TransferValidationError::DateRequired]
    );
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("garbage"))]
#[case(Some("2000-01-01"))]
#[case(Some("2999-01-01"))]
fn instant_transfers_ignore_the_date(
    valid_instant: TransferCandidate,
    today: NaiveDate,
    #[case] date: Option<&str>,
) {
    let candidate = TransferCandidate {
        date: date.map(str::to_owned),
        ..valid_instant
    };
    assert!(validate(&candidate, today).is_empty());
}

#[rstest]
fn errors_from_every_field_are_collected_in_order(today: NaiveDate) {
    let candidate = TransferCandidate::instant(" ", "", "#", "abc").scheduled_on("garbage");
    let errors = validate(&candidate, today);
    assert_eq!(
        errors,
        vec![
            TransferValidationError::BeneficiaryRequired,
            TransferValidationError::IbanRequired,
            TransferValidationError::LabelInvalid,
            TransferValidationError::AmountRequired,
            TransferValidationError::DateRequired,
        ]
    );
    let fields: Vec<_> = errors.iter().map(|err| err.field()).collect();
    assert!(fields.is_sorted());
}

#[rstest]
fn validation_is_deterministic(today: NaiveDate) {
    let candidate = TransferCandidate::instant("", "x", "", "").scheduled_on("2000-01-01");
    assert_eq!(validate(&candidate, today), validate(&candidate, today));
}

#[rstest]
#[case(TransferValidationError::IbanRequired, "iban_required", TransferField::Iban)]
#[case(TransferValidationError::LabelInvalid, "label_invalid", TransferField::Label)]
#[case(TransferValidationError::AmountRange, "amount_range", TransferField::Amount)]
#[case(TransferValidationError::DateTooLate, "date_too_late", TransferField::Date)]
fn errors_expose_code_and_field(
    #[case] error: TransferValidationError,
    #[case] code: &str,
    #[case] field: TransferField,
) {
    assert_eq!(error.code(), code);
    assert_eq!(error.field(), field);
}

#[rstest]
#[case("Administrator", true)]
#[case("Purchase Manager", true)]
#[case("Guest", false)]
#[case("", false)]
#[case("administrator", false)]
#[case(" Administrator", false)]
#[case("Purchase Manager ", false)]
#[case("Accountant", false)]
fn only_listed_roles_are_authorized(#[case] role: &str, #[case] allowed: bool) {
    assert_eq!(authorize(&Role::new(role)), allowed);
}

#[rstest]
fn empty_role_defaults_to_guest() {
    assert_eq!(Role::new(""), Role::guest());
    assert_eq!(Role::default().as_str(), GUEST_ROLE);
}

#[rstest]
fn scenario_administrator_submits_valid_instant(valid_instant: TransferCandidate, today: NaiveDate) {
    let outcome = resolve(&valid_instant, &Role::new("Administrator"), today);
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(outcome.message(), SUCCESS_MESSAGE);
}

#[rstest]
fn scenario_guest_is_denied(valid_instant: TransferCandidate, today: NaiveDate) {
    let outcome = resolve(&valid_instant, &Role::guest(), today);
    assert_eq!(outcome, Outcome::AccessDenied);
    assert_eq!(outcome.message(), ACCESS_DENIED_MESSAGE);
}

#[rstest]
#[case("Administrator")]
#[case("Guest")]
fn scenario_missing_iban_fails_for_any_role(
    valid_instant: TransferCandidate,
    today: NaiveDate,
    #[case] role: &str,
) {
    let candidate = TransferCandidate {
        iban: String::new(),
        ..valid_instant
    };
    let outcome = resolve(&candidate, &Role::new(role), today);
    assert_eq!(
        outcome,
        Outcome::ValidationFailed(vec![TransferValidationError::IbanRequired])
    );
    assert_eq!(outcome.message(), "Invalid: IBAN required");
}

#[rstest]
fn scenario_scheduled_yesterday_is_too_early(valid_instant: TransferCandidate, today: NaiveDate) {
    let candidate = valid_instant.scheduled_on(yesterday(today));
    let outcome = resolve(&candidate, &Role::new("Administrator"), today);
    assert_eq!(outcome.kind(), OutcomeKind::ValidationFailed);
    assert!(outcome.errors().contains(&TransferValidationError::DateTooEarly));
    assert_eq!(outcome.message(), "Invalid: Date too early");
}

#[rstest]
fn validation_failures_win_over_denied_roles(today: NaiveDate) {
    let candidate = TransferCandidate::instant("", "", "", "");
    let outcome = resolve(&candidate, &Role::guest(), today);
    assert_eq!(outcome.kind(), OutcomeKind::ValidationFailed);
    assert_eq!(
        outcome.message(),
        "Invalid: Beneficiary required, IBAN required, Label required, Amount required"
    );
}

#[rstest]
fn schedule_window_spans_tomorrow_to_ninety_days(today: NaiveDate) {
    let window = ScheduleWindow::starting_from(today);
    assert_eq!(window.earliest().to_string(), days_after(today, 1));
    assert_eq!(window.latest().to_string(), days_after(today, 90));
    assert!(!window.contains(today));
    assert!(window.contains(window.earliest()));
    assert!(window.contains(window.latest()));
}

#[rstest]
fn schedule_window_saturates_at_calendar_end() {
    let window = ScheduleWindow::starting_from(NaiveDate::MAX);
    assert_eq!(window.earliest(), NaiveDate::MAX);
    assert_eq!(window.latest(), NaiveDate::MAX);
}

#[rstest]
#[case("instant", TransferMode::Instant)]
#[case("scheduled", TransferMode::Scheduled)]
fn transfer_mode_parses_form_values(#[case] raw: &str, #[case] expected: TransferMode) {
    let mode: TransferMode = raw.parse().expect("known mode");
    assert_eq!(mode, expected);
    assert_eq!(mode.to_string(), raw);
}

#[rstest]
fn transfer_mode_rejects_unknown_values() {
    let err = "weekly".parse::<TransferMode>().expect_err("unknown mode");
    assert_eq!(err.value, "weekly");
}
