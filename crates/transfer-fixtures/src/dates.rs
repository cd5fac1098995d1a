//! Relative calendar dates for scheduled transfer scenarios.

use chrono::{NaiveDate, TimeDelta};

use crate::error::FixtureError;

/// `strftime` pattern for the ISO calendar dates used by the transfer form.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders `today` shifted by `days` as `YYYY-MM-DD`.
///
/// Negative offsets produce past dates, which scenarios use for the
/// "yesterday" case.
///
/// # Errors
///
/// Returns [`FixtureError::DateOutOfRange`] if the shifted date cannot be
/// represented.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use transfer_fixtures::date_from_today;
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 28).expect("valid date");
/// assert_eq!(date_from_today(today, 1).expect("in range"), "2026-03-01");
/// assert_eq!(date_from_today(today, -1).expect("in range"), "2026-02-27");
/// ```
pub fn date_from_today(today: NaiveDate, days: i64) -> Result<String, FixtureError> {
    TimeDelta::try_days(days)
        .and_then(|delta| today.checked_add_signed(delta))
        .map(|date| date.format(ISO_DATE_FORMAT).to_string())
        .ok_or(FixtureError::DateOutOfRange { days })
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "2026-12-31")]
    #[case(1, "2027-01-01")]
    #[case(90, "2027-03-31")]
    #[case(91, "2027-04-01")]
    #[case(-1, "2026-12-30")]
    fn shifts_across_year_end(#[case] days: i64, #[case] expected: &str) {
        let today = NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid date");
        assert_eq!(date_from_today(today, days).expect("in range"), expected);
    }

    #[test]
    fn huge_offsets_are_rejected() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date");
        let err = date_from_today(today, i64::MAX).expect_err("offset too large");
        assert_eq!(err, FixtureError::DateOutOfRange { days: i64::MAX });
    }
}
