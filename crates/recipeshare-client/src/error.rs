//! Error types for the client core
//!
//! Taxonomy:
//! - identity transport failures (degraded to signed-out at the session
//!   layer, never fatal to rendering)
//! - store write failures (user-facing, draft retained for retry)
//! - store read failures (log-only, list degrades to empty)
//! - submit preconditions (missing identity, submission already in flight)

/// Identity provider transport failure
///
/// Never reaches a rendering path: [`SessionContext`](crate::auth::SessionContext)
/// logs it and degrades to signed-out.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// Provider unreachable or answered malformed
    #[error("identity transport failed: {0}")]
    Transport(String),
}

/// Data store failure
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Insert rejected by the store
    #[error("insert rejected: {0}")]
    Write(String),

    /// Select failed
    #[error("select failed: {0}")]
    Read(String),

    /// Store unreachable, or a configured timeout elapsed
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Draft submission failure
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// No identity at submit time; blocking, the user must sign in
    #[error("please sign in to create a recipe")]
    AuthRequired,

    /// A submission from this form is already outstanding
    #[error("submission already in flight")]
    InFlight,

    /// Store rejected the insert; the draft is retained for retry
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Whether retrying the unchanged draft can succeed without user action
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_) | Self::InFlight)
    }
}
