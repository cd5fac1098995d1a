//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{RoleDirectory, TransferSubmission};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Submission use-case.
    pub transfers: Arc<dyn TransferSubmission>,
    /// Role alias resolution.
    pub roles: Arc<dyn RoleDirectory>,
}

impl HttpState {
    /// Bundle the port implementations.
    pub fn new(transfers: Arc<dyn TransferSubmission>, roles: Arc<dyn RoleDirectory>) -> Self {
        Self { transfers, roles }
    }
}
