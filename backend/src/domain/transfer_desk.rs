//! Transfer submission service backed by a clock.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::TransferSubmission;
use crate::domain::{Outcome, Role, ScheduleWindow, TransferCandidate, resolve};

/// Resolves submissions against the local calendar date read from a clock.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use bank_transfer::domain::ports::TransferSubmission;
/// use bank_transfer::domain::{Outcome, Role, TransferCandidate, TransferDesk};
/// use mockable::DefaultClock;
///
/// let desk = TransferDesk::new(Arc::new(DefaultClock));
/// let candidate = TransferCandidate::instant(
///     "Alice GmbH",
///     "DE89370400440532013000",
///     "Invoice",
///     "50.00",
/// );
/// assert_eq!(desk.submit(&candidate, &Role::new("Administrator")), Outcome::Success);
/// ```
#[derive(Clone)]
pub struct TransferDesk {
    clock: Arc<dyn Clock>,
}

impl TransferDesk {
    /// Create a desk reading "today" from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

impl TransferSubmission for TransferDesk {
    fn submit(&self, candidate: &TransferCandidate, role: &Role) -> Outcome {
        let today = self.today();
        let outcome = resolve(candidate, role, today);
        let codes: Vec<&str> = outcome.errors().iter().map(|err| err.code()).collect();
        info!(
            outcome = %outcome.kind(),
            role = %role,
            mode = %candidate.mode,
            errors = ?codes,
            "transfer submission resolved"
        );
        outcome
    }

    fn schedule_window(&self) -> ScheduleWindow {
        let window = ScheduleWindow::starting_from(self.today());
        debug!(
            earliest = %window.earliest(),
            latest = %window.latest(),
            "schedule window computed"
        );
        window
    }
}
