//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use transfer_fixtures::UserFixtures;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) users: Option<UserFixtures>,
}

impl ServerConfig {
    /// Construct a server configuration from loaded settings.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            users: None,
        }
    }

    /// Resolve role aliases through a users fixture instead of taking them
    /// verbatim.
    #[must_use]
    pub fn with_users(mut self, users: Option<UserFixtures>) -> Self {
        self.users = users;
        self
    }
}
