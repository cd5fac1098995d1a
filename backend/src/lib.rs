//! Bank transfer decision service.
//!
//! The [`domain`] module holds the validation, authorization, and outcome
//! rules for transfer submissions. [`inbound::http`] exposes them over
//! actix-web, [`outbound`] resolves role aliases from fixtures, and
//! [`settings`] loads server configuration.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
