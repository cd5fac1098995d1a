//! Calendar window for scheduled transfers.

use chrono::{Days, NaiveDate};

/// First day offset a scheduled transfer may use (tomorrow).
pub const MIN_SCHEDULE_DAYS: u64 = 1;

/// Last day offset a scheduled transfer may use.
pub const MAX_SCHEDULE_DAYS: u64 = 90;

/// `strftime` pattern of the form's date input.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Where a date sits relative to a [`ScheduleWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePosition {
    /// Before the earliest allowed day.
    TooEarly,
    /// Inside the window, bounds included.
    Within,
    /// After the latest allowed day.
    TooLate,
}

/// Inclusive range of dates a scheduled transfer may target.
///
/// ## Invariants
/// - `earliest <= latest`.
/// - Both bounds are calendar days; time of day plays no part.
///
/// # Examples
/// ```
/// use bank_transfer::domain::{SchedulePosition, ScheduleWindow};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
/// let window = ScheduleWindow::starting_from(today);
///
/// assert_eq!(window.earliest().to_string(), "2026-10-20");
/// assert_eq!(window.latest().to_string(), "2027-01-17");
/// assert_eq!(window.position(today), SchedulePosition::TooEarly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl ScheduleWindow {
    /// Window running from tomorrow to 90 days after `today`.
    ///
    /// Bounds saturate at the end of the supported calendar.
    pub fn starting_from(today: NaiveDate) -> Self {
        Self {
            earliest: offset(today, MIN_SCHEDULE_DAYS),
            latest: offset(today, MAX_SCHEDULE_DAYS),
        }
    }

    /// First allowed day.
    pub const fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    /// Last allowed day.
    pub const fn latest(&self) -> NaiveDate {
        self.latest
    }

    /// Classify `date` against the window.
    pub fn position(&self, date: NaiveDate) -> SchedulePosition {
        if date < self.earliest {
            SchedulePosition::TooEarly
        } else if date > self.latest {
            SchedulePosition::TooLate
        } else {
            SchedulePosition::Within
        }
    }

    /// Whether `date` lies inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.position(date) == SchedulePosition::Within
    }
}

fn offset(today: NaiveDate, days: u64) -> NaiveDate {
    today
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Parse a form date (`YYYY-MM-DD`), surrounding whitespace ignored.
pub(super) fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT).ok()
}
