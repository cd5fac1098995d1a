//! Tests for the HTTP mapping of domain errors.

use actix_web::{body::to_bytes, http::StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::TraceId;

async fn respond(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = error.error_response();
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace-id is ASCII").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::Forbidden, StatusCode::FORBIDDEN)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn codes_map_to_statuses(#[case] code: ErrorCode, #[case] status: StatusCode) {
    assert_eq!(Error::new(code, "x").status_code(), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_hide_message_and_details() {
    let trace_id = TraceId::generate();
    let error = TraceId::scope(trace_id, async {
        Error::internal("failed to persist session: key mismatch")
            .with_details(json!({ "secret": "x" }))
    })
    .await;

    let (status, header, body) = respond(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header, Some(trace_id.to_string()));
    assert_eq!(
        body,
        json!({
            "code": "internal_error",
            "message": "Internal server error",
            "traceId": trace_id.to_string()
        })
    );
}

#[rstest]
#[actix_web::test]
async fn validation_details_reach_clients() {
    let error = Error::invalid_request("Invalid: IBAN required").with_details(json!({
        "errors": [{"field": "iban", "code": "iban_required", "message": "IBAN required"}]
    }));

    let (status, header, body) = respond(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header, None);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "Invalid: IBAN required");
    assert_eq!(body.pointer("/details/errors/0/code"), Some(&json!("iban_required")));
    assert!(body.get("traceId").is_none());
}

#[rstest]
#[actix_web::test]
async fn forbidden_body_carries_only_code_and_message() {
    let (status, _, body) = respond(&Error::forbidden("Access denied")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "code": "forbidden", "message": "Access denied" }));
}
