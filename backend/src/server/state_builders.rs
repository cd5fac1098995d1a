//! Builders for the HTTP state shared by every worker.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use bank_transfer::domain::TransferDesk;
use bank_transfer::domain::ports::{PassthroughRoleDirectory, RoleDirectory};
use bank_transfer::inbound::http::state::HttpState;
use bank_transfer::outbound::role_fixtures::FixtureRoleDirectory;

use super::ServerConfig;

/// Build the role directory, preferring the users fixture when configured.
fn build_role_directory(config: &ServerConfig) -> Arc<dyn RoleDirectory> {
    match &config.users {
        Some(users) => {
            info!("resolving role aliases from users fixture");
            Arc::new(FixtureRoleDirectory::new(users.clone()))
        }
        None => Arc::new(PassthroughRoleDirectory),
    }
}

/// Build HTTP state backed by the system clock.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    web::Data::new(HttpState::new(
        Arc::new(TransferDesk::new(clock)),
        build_role_directory(config),
    ))
}
