//! JSON error envelope for transfer and session handlers.
//!
//! A domain [`Error`] becomes a response with the status for its code, a
//! `trace-id` header when a request trace was in scope, and a camelCase body:
//!
//! ```json
//! {"code":"invalid_request","message":"Invalid: IBAN required","traceId":"…","details":{…}}
//! ```
//!
//! Internal failures are logged in full but reach clients only as a generic
//! message without details.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// What a client is allowed to see of an [`Error`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

impl<'a> From<&'a Error> for ErrorBody<'a> {
    fn from(error: &'a Error) -> Self {
        let internal = matches!(error.code(), ErrorCode::InternalError);
        Self {
            code: error.code().as_str(),
            message: if internal {
                INTERNAL_MESSAGE
            } else {
                error.message()
            },
            trace_id: error.trace_id().map(|id| id.to_string()),
            details: if internal { None } else { error.details() },
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = self.message(), details = ?self.details(), "internal error");
        }

        let body = ErrorBody::from(self);
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(trace_id) = &body.trace_id {
            builder.insert_header((TRACE_ID_HEADER, trace_id.as_str()));
        }
        builder.json(&body)
    }
}

#[cfg(test)]
mod tests;
