//! Client configuration

use std::time::Duration;

/// Tuning knobs for the client workflows
///
/// Both timeouts default to `None`: the core waits on a hung collaborator
/// indefinitely unless explicitly bounded, exactly like the transports it
/// wraps.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientConfig {
    /// Optional bound on the insert call during submit
    pub submit_timeout: Option<Duration>,
    /// Optional bound on the select call during list load
    pub load_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Default configuration (unbounded waits)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the submit-time insert call
    #[inline]
    #[must_use]
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = Some(timeout);
        self
    }

    /// Bound the load-time select call
    #[inline]
    #[must_use]
    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = Some(timeout);
        self
    }
}
