//! Driving port for submitting transfer candidates.
//!
//! Inbound adapters (HTTP handlers, the CLI checker) call this port to obtain
//! an [`Outcome`] without knowing where "today" comes from. Handler tests can
//! substitute a mock and pin the outcome.

use crate::domain::{Outcome, Role, ScheduleWindow, TransferCandidate};

/// Domain use-case port for transfer submission.
#[cfg_attr(test, mockall::automock)]
pub trait TransferSubmission: Send + Sync {
    /// Decide the outcome of submitting `candidate` as `role`.
    fn submit(&self, candidate: &TransferCandidate, role: &Role) -> Outcome;

    /// Dates a scheduled transfer may currently target.
    fn schedule_window(&self) -> ScheduleWindow;
}
