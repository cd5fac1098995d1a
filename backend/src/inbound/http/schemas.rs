//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their structure for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The acting role may not perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid: IBAN required")]
    message: String,
    /// Correlation identifier for this request.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details; validation failures list `errors`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::TransferMode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TransferMode)]
pub enum TransferModeSchema {
    /// Executed straight away.
    #[schema(rename = "instant")]
    Instant,
    /// Executed on the given date.
    #[schema(rename = "scheduled")]
    Scheduled,
}
