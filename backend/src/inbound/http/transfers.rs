//! Transfer API handlers.
//!
//! ```text
//! POST /api/v1/transfers {"beneficiary":"Alice GmbH","iban":"DE89370400440532013000",
//!                         "label":"Invoice","amount":"50.00","mode":"instant"}
//! GET /api/v1/transfers/schedule-window
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    ACCESS_DENIED_MESSAGE, Error, ISO_DATE_FORMAT, Outcome, ParseTransferModeError,
    ScheduleWindow, TransferCandidate, TransferMode, TransferValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Transfer form submitted to `POST /api/v1/transfers`.
///
/// Missing text fields are treated as empty so they surface as validation
/// errors. `mode` defaults to `instant`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferRequest {
    /// Payee display name.
    #[schema(example = "Alice GmbH")]
    pub beneficiary: String,
    /// Account identifier.
    #[schema(example = "DE89370400440532013000")]
    pub iban: String,
    /// Free-text reference.
    #[schema(example = "Invoice")]
    pub label: String,
    /// Amount as typed.
    #[schema(example = "50.00")]
    pub amount: String,
    /// `instant` or `scheduled`.
    #[schema(example = "instant")]
    pub mode: Option<String>,
    /// Execution date (`YYYY-MM-DD`) for scheduled transfers.
    #[schema(example = "2026-11-02")]
    pub date: Option<String>,
}

impl TryFrom<TransferRequest> for TransferCandidate {
    type Error = ParseTransferModeError;

    /// Trims the text fields the way the form does; amount and date stay raw.
    fn try_from(value: TransferRequest) -> Result<Self, Self::Error> {
        let mode = match value.mode.as_deref().map(str::trim) {
            None | Some("") => TransferMode::Instant,
            Some(raw) => raw.parse()?,
        };
        Ok(Self {
            beneficiary: value.beneficiary.trim().to_owned(),
            iban: value.iban.trim().to_owned(),
            label: value.label.trim().to_owned(),
            amount: value.amount,
            mode,
            date: value.date,
        })
    }
}

/// Body of a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    /// Always `success`.
    #[schema(example = "success")]
    pub outcome: String,
    /// Message for the person submitting the form.
    #[schema(example = "Transfer created successfully")]
    pub message: String,
}

/// One failed field rule, listed under `details.errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// Form field name.
    #[schema(example = "iban")]
    pub field: String,
    /// Stable rule code.
    #[schema(example = "iban_required")]
    pub code: String,
    /// Human-readable message.
    #[schema(example = "IBAN required")]
    pub message: String,
}

impl From<TransferValidationError> for ValidationIssue {
    fn from(value: TransferValidationError) -> Self {
        Self {
            field: value.field().to_string(),
            code: value.code().to_owned(),
            message: value.to_string(),
        }
    }
}

/// Dates accepted for scheduled transfers, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWindowResponse {
    /// Earliest allowed date.
    #[schema(example = "2026-10-20")]
    pub earliest: String,
    /// Latest allowed date.
    #[schema(example = "2027-01-17")]
    pub latest: String,
}

impl From<ScheduleWindow> for ScheduleWindowResponse {
    fn from(value: ScheduleWindow) -> Self {
        Self {
            earliest: value.earliest().format(ISO_DATE_FORMAT).to_string(),
            latest: value.latest().format(ISO_DATE_FORMAT).to_string(),
        }
    }
}

fn map_mode_error(err: ParseTransferModeError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": "mode", "code": "invalid_mode" }))
}

fn outcome_response(outcome: Outcome) -> ApiResult<HttpResponse> {
    let kind = outcome.kind();
    let message = outcome.message();
    match outcome {
        Outcome::Success => Ok(HttpResponse::Created().json(TransferResponse {
            outcome: kind.as_str().to_owned(),
            message,
        })),
        Outcome::ValidationFailed(errors) => {
            let issues: Vec<ValidationIssue> =
                errors.into_iter().map(ValidationIssue::from).collect();
            Err(Error::invalid_request(message).with_details(json!({ "errors": issues })))
        }
        Outcome::AccessDenied => Err(Error::forbidden(ACCESS_DENIED_MESSAGE)),
    }
}

/// Submit a transfer as the session's acting role.
///
/// Validation runs before the role check, so a guest submitting a malformed
/// form sees the validation errors rather than a denial.
#[utoipa::path(
    post,
    path = "/api/v1/transfers",
    request_body = TransferRequest,
    responses(
        (status = 201, description = "Transfer created", body = TransferResponse),
        (status = 400, description = "Invalid transfer", body = ErrorSchema),
        (status = 403, description = "Role may not submit transfers", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["transfers"],
    operation_id = "submitTransfer"
)]
#[post("/transfers")]
pub async fn submit_transfer(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<TransferRequest>,
) -> ApiResult<HttpResponse> {
    let candidate = TransferCandidate::try_from(payload.into_inner()).map_err(map_mode_error)?;
    let role = session.role()?;
    outcome_response(state.transfers.submit(&candidate, &role))
}

/// Dates a scheduled transfer may currently target.
#[utoipa::path(
    get,
    path = "/api/v1/transfers/schedule-window",
    responses(
        (status = 200, description = "Schedule window", body = ScheduleWindowResponse)
    ),
    tags = ["transfers"],
    operation_id = "getScheduleWindow"
)]
#[get("/transfers/schedule-window")]
pub async fn schedule_window(state: web::Data<HttpState>) -> web::Json<ScheduleWindowResponse> {
    web::Json(state.transfers.schedule_window().into())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::NaiveDate;
    use mockall::predicate::always;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::Role;
    use crate::domain::ports::MockTransferSubmission;
    use crate::inbound::http::test_utils::{http_state, test_session_middleware};

    fn valid_request() -> TransferRequest {
        TransferRequest {
            beneficiary: "  Alice GmbH ".to_owned(),
            iban: " DE89370400440532013000".to_owned(),
            label: "Invoice ".to_owned(),
            amount: "50.00".to_owned(),
            mode: Some("instant".to_owned()),
            date: None,
        }
    }

    async fn post_transfer(transfers: MockTransferSubmission, body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(http_state(transfers))
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(submit_transfer)),
        )
        .await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/transfers")
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body: Value = actix_test::read_body_json(response).await;
        (status, body)
    }

    fn returning(outcome: Outcome) -> MockTransferSubmission {
        let mut transfers = MockTransferSubmission::new();
        transfers
            .expect_submit()
            .with(always(), always())
            .times(1)
            .return_const(outcome);
        transfers
    }

    #[rstest]
    fn request_fields_are_trimmed_except_amount_and_date() {
        let request = TransferRequest {
            amount: " 50.00 ".to_owned(),
            date: Some(" 2026-11-02".to_owned()),
            mode: Some(" scheduled ".to_owned()),
            ..valid_request()
        };
        let candidate = TransferCandidate::try_from(request).expect("known mode");
        assert_eq!(candidate.beneficiary, "Alice GmbH");
        assert_eq!(candidate.iban, "DE89370400440532013000");
        assert_eq!(candidate.label, "Invoice");
        assert_eq!(candidate.amount, " 50.00 ");
        assert_eq!(candidate.mode, TransferMode::Scheduled);
        assert_eq!(candidate.date.as_deref(), Some(" 2026-11-02"));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn absent_mode_means_instant(#[case] mode: Option<&str>) {
        let request = TransferRequest {
            mode: mode.map(str::to_owned),
            ..valid_request()
        };
        let candidate = TransferCandidate::try_from(request).expect("default mode");
        assert_eq!(candidate.mode, TransferMode::Instant);
    }

    #[rstest]
    #[actix_web::test]
    async fn success_returns_created() {
        let (status, body) = post_transfer(
            returning(Outcome::Success),
            serde_json::to_value(valid_request()).expect("serialise request"),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["outcome"], "success");
        assert_eq!(body["message"], "Transfer created successfully");
    }

    #[rstest]
    #[actix_web::test]
    async fn validation_failure_lists_every_issue() {
        let outcome = Outcome::ValidationFailed(vec![
            TransferValidationError::IbanRequired,
            TransferValidationError::AmountRange,
        ]);
        let (status, body) = post_transfer(
            returning(outcome),
            serde_json::to_value(valid_request()).expect("serialise request"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["message"], "Invalid: IBAN required, Amount range");
        assert_eq!(
            body["details"]["errors"],
            json!([
                {"field": "iban", "code": "iban_required", "message": "IBAN required"},
                {"field": "amount", "code": "amount_range", "message": "Amount range"}
            ])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn access_denied_returns_forbidden() {
        let (status, body) = post_transfer(
            returning(Outcome::AccessDenied),
            serde_json::to_value(valid_request()).expect("serialise request"),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "forbidden");
        assert_eq!(body["message"], "Access denied");
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_mode_is_rejected_before_submission() {
        let mut transfers = MockTransferSubmission::new();
        transfers.expect_submit().never();
        let mut body = serde_json::to_value(valid_request()).expect("serialise request");
        body["mode"] = json!("weekly");

        let (status, body) = post_transfer(transfers, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "mode");
        assert_eq!(body["details"]["code"], "invalid_mode");
    }

    #[rstest]
    #[actix_web::test]
    async fn session_without_role_submits_as_guest() {
        let mut transfers = MockTransferSubmission::new();
        transfers
            .expect_submit()
            .withf(|candidate, role| {
                candidate.beneficiary == "Alice GmbH" && *role == Role::guest()
            })
            .times(1)
            .return_const(Outcome::AccessDenied);

        let (status, _) = post_transfer(
            transfers,
            serde_json::to_value(valid_request()).expect("serialise request"),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[rstest]
    #[actix_web::test]
    async fn schedule_window_is_formatted_as_iso_dates() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        let mut transfers = MockTransferSubmission::new();
        transfers
            .expect_schedule_window()
            .return_const(ScheduleWindow::starting_from(today));
        let app = actix_test::init_service(
            App::new()
                .app_data(http_state(transfers))
                .service(web::scope("/api/v1").service(schedule_window)),
        )
        .await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/transfers/schedule-window")
            .to_request();
        let body: ScheduleWindowResponse = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(
            body,
            ScheduleWindowResponse {
                earliest: "2026-10-20".to_owned(),
                latest: "2027-01-17".to_owned(),
            }
        );
    }
}
