//! Correlation identifier for one transfer request.
//!
//! The [`crate::Trace`] middleware mints a [`TraceId`] per request and runs the
//! handler inside [`TraceId::scope`]. Anything on that task, such as the
//! transfer desk's log events or a domain [`crate::domain::Error`], can then
//! read it back with [`TraceId::current`].
//!
//! The identifier is a tokio task local, so work spawned onto another task
//! must be wrapped in [`TraceId::scope`] again.

use std::fmt;
use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// Response header echoing the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Random identifier tying a request's logs, errors, and response together.
///
/// # Examples
/// ```
/// use bank_transfer::TraceId;
///
/// // No request is in flight here.
/// assert!(TraceId::current().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a fresh random identifier.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier of the request being served on this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}
