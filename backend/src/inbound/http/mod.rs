//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod session_role;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod transfers;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api/v1` endpoint on `cfg`.
///
/// The caller wraps the scope in session middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(transfers::schedule_window)
        .service(transfers::submit_transfer)
        .service(session_role::current_role)
        .service(session_role::set_role);
}
