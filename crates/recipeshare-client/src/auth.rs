//! Identity provider contract and the process-wide session context

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::warn;

use recipeshare_model::Identity;

use crate::error::IdentityError;

/// External identity/session service
///
/// Implementations wrap whatever auth backend the host app uses. The core
/// only ever reads the current identity, subscribes to changes, and asks
/// for sign-out; it never writes session state itself.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the currently authenticated identity, if any
    ///
    /// Transient transport failures are expected; callers must not treat an
    /// `Err` as fatal.
    async fn current_identity(&self) -> Result<Option<Identity>, IdentityError>;

    /// Watch session changes (sign-in, sign-out, token refresh)
    ///
    /// The receiver carries the full current value after every change, so
    /// consumers never poll.
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;

    /// End the current session
    async fn sign_out(&self) -> Result<(), IdentityError>;
}

/// Process-wide reactive holder of the current identity
///
/// Read-only for every consumer: components resolve or watch the identity
/// here and never mutate it. A provider error is equivalent to being signed
/// out - logged and degraded to `None`, never propagated into a rendering
/// path.
#[derive(Clone)]
pub struct SessionContext {
    provider: Arc<dyn IdentityProvider>,
}

impl SessionContext {
    /// Wrap an identity provider
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Current identity, with transport failures degraded to signed-out
    pub async fn current(&self) -> Option<Identity> {
        match self.provider.current_identity().await {
            Ok(identity) => identity,
            Err(err) => {
                warn!(error = %err, "identity resolution failed, treating as signed out");
                None
            }
        }
    }

    /// Subscribe to session changes
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Option<Identity>> {
        self.provider.subscribe()
    }

    /// Sign the current user out
    ///
    /// Provider failures are logged and swallowed; the watch channel is
    /// what tells consumers whether the session actually ended.
    pub async fn sign_out(&self) {
        if let Err(err) = self.provider.sign_out().await {
            warn!(error = %err, "sign-out failed");
        }
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}
