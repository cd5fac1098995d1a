//! Bank transfer service entry-point: loads settings, wires REST endpoints,
//! and serves OpenAPI docs in debug builds.

mod server;

use actix_web::cookie::SameSite;
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use bank_transfer::inbound::http::health::HealthState;
use bank_transfer::settings::{BuildMode, ServerSettings};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let key = settings
        .session_key(BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let users = settings.users_fixture().map_err(std::io::Error::other)?;

    let config = ServerConfig::new(key, settings.cookie_secure(), SameSite::Lax, bind_addr)
        .with_users(users);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
