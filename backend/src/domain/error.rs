//! Failure raised while handling a transfer request.
//!
//! [`Error`] knows nothing about HTTP. The inbound adapter decides the status
//! code, the JSON envelope, and what gets hidden from clients.

use serde_json::Value;

use super::TraceId;

/// Category of failure; adapters map each to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The form or request body is malformed or fails validation.
    InvalidRequest,
    /// The acting role may not create transfers.
    Forbidden,
    /// Something broke inside the service, such as the session store.
    InternalError,
}

impl ErrorCode {
    /// Wire name of the code, as sent to clients.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Forbidden => "forbidden",
            Self::InternalError => "internal_error",
        }
    }

    const fn default_message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::Forbidden => "Forbidden",
            Self::InternalError => "Internal server error",
        }
    }
}

/// A categorised failure with a message and optional structured details.
///
/// The trace identifier of the request in flight is captured on construction,
/// so handlers never attach it by hand.
///
/// # Examples
/// ```
/// use bank_transfer::domain::{Error, ErrorCode};
/// use serde_json::json;
///
/// let err = Error::invalid_request("Invalid: IBAN required")
///     .with_details(json!({ "field": "iban" }));
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.to_string(), "Invalid: IBAN required");
/// assert_eq!(err.details(), Some(&json!({ "field": "iban" })));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<TraceId>,
    details: Option<Value>,
}

impl Error {
    /// Build an error of the given category.
    ///
    /// A blank message is replaced with a generic one for `code`.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            code.default_message().clone_into(&mut message);
        }
        Self {
            code,
            message,
            trace_id: TraceId::current(),
            details: None,
        }
    }

    /// A malformed request or a form that failed validation.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// The acting role is not allowed to do this.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// An unexpected internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Attach structured details, replacing any set before.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Failure category.
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace identifier of the request that raised the error.
    pub const fn trace_id(&self) -> Option<TraceId> {
        self.trace_id
    }

    /// Structured details, such as the failing fields.
    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}
