//! Outbound adapters implementing domain ports.
//!
//! - **role_fixtures**: role alias resolution backed by a users fixture.

pub mod role_fixtures;
