//! Domain primitives and services.
//!
//! Purpose: define the transfer decision rules and the strongly typed values
//! they operate on, free of any transport concern. Inbound adapters build a
//! [`TransferCandidate`], pick a [`Role`], and ask a
//! [`ports::TransferSubmission`] for the [`Outcome`].
//!
//! Public surface:
//! - [`TransferCandidate`] / [`TransferMode`]: raw form input.
//! - [`validate`], [`authorize`], [`resolve`]: pure decision rules.
//! - [`ScheduleWindow`]: dates a scheduled transfer may target.
//! - [`TransferDesk`]: clock-backed implementation of the submission port.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic error payload.
//! - [`TraceId`]: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod transfer;
mod transfer_desk;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::transfer::{
    ACCESS_DENIED_MESSAGE, ALLOWED_ROLES, AMOUNT_MAX, AMOUNT_MIN, GUEST_ROLE, IBAN_MAX_LEN,
    IBAN_MIN_LEN, INVALID_MESSAGE_PREFIX, ISO_DATE_FORMAT, LABEL_MAX_LEN, MAX_SCHEDULE_DAYS,
    MIN_SCHEDULE_DAYS, Outcome, OutcomeKind, ParseTransferModeError, Role, SUCCESS_MESSAGE,
    SchedulePosition, ScheduleWindow, TransferCandidate, TransferField, TransferMode,
    TransferValidationError, authorize, resolve, validate,
};
pub use self::transfer_desk::TransferDesk;
