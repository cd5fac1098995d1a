//! Acting-role override stored in the session.
//!
//! ```text
//! PUT /api/v1/session/role {"role":"admin"}
//! GET /api/v1/session/role
//! ```
//!
//! No identity is verified: whatever role is stored here is the role the next
//! transfer submission is checked against.

use actix_web::{get, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Request body naming the role to act as.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    /// Role name or alias such as a users fixture key.
    #[schema(example = "admin")]
    pub role: String,
}

/// The acting role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    /// Resolved role name.
    #[schema(example = "Administrator")]
    pub role: String,
}

/// Resolve a role alias and act as that role for the rest of the session.
#[utoipa::path(
    put,
    path = "/api/v1/session/role",
    request_body = RoleRequest,
    responses(
        (status = 200, description = "Role stored", body = RoleResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Empty role", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "setRole"
)]
#[put("/session/role")]
pub async fn set_role(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RoleRequest>,
) -> ApiResult<web::Json<RoleResponse>> {
    let alias = payload.role.as_str();
    if alias.is_empty() {
        return Err(Error::invalid_request("role must not be empty")
            .with_details(json!({ "field": "role", "code": "empty_role" })));
    }
    let role = state.roles.resolve(alias);
    session.persist_role(&role)?;
    info!(alias, role = %role, "session role set");
    Ok(web::Json(RoleResponse {
        role: role.to_string(),
    }))
}

/// Report the acting role; `Guest` when none was set.
#[utoipa::path(
    get,
    path = "/api/v1/session/role",
    responses(
        (status = 200, description = "Current role", body = RoleResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "currentRole"
)]
#[get("/session/role")]
pub async fn current_role(session: SessionContext) -> ApiResult<web::Json<RoleResponse>> {
    let role = session.role()?;
    Ok(web::Json(RoleResponse {
        role: role.to_string(),
    }))
}
