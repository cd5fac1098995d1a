//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every transfer, session, and health endpoint together
//! with the schema wrappers from [`crate::inbound::http::schemas`], which keep
//! domain types free of utoipa derives. The session cookie carrying the acting
//! role is described as a security scheme.
//!
//! The document backs Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, TransferModeSchema};
use crate::inbound::http::session_role::{RoleRequest, RoleResponse};
use crate::inbound::http::transfers::{
    ScheduleWindowResponse, TransferRequest, TransferResponse, ValidationIssue,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by PUT /api/v1/session/role.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bank transfer API",
        description = "Validate, authorize, and resolve bank transfer submissions.",
        license(
            name = "MIT",
            url = "https://opensource.org/license/mit"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::transfers::submit_transfer,
        crate::inbound::http::transfers::schedule_window,
        crate::inbound::http::session_role::set_role,
        crate::inbound::http::session_role::current_role,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        TransferModeSchema,
        TransferRequest,
        TransferResponse,
        ValidationIssue,
        ScheduleWindowResponse,
        RoleRequest,
        RoleResponse
    )),
    tags(
        (name = "transfers", description = "Transfer submission and scheduling"),
        (name = "session", description = "Acting role for the session"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
