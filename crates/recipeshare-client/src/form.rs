//! Recipe authoring form
//!
//! Owns one [`RecipeDraft`] plus the submit-exclusivity flag. Submission is
//! the only concurrency-relevant path in the core: the flag is
//! read-then-set before the first suspension point, so at most one insert
//! is ever in flight per form instance.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info};

use recipeshare_model::RecipeDraft;

use crate::auth::SessionContext;
use crate::config::ClientConfig;
use crate::error::{StoreError, SubmitError};
use crate::nav::{Navigator, Route};
use crate::store::RecipeStore;

/// The recipe creation form
///
/// Interior-mutable so UI handlers can share one instance: the draft sits
/// behind a mutex and the submitting flag is atomic.
pub struct DraftForm {
    session: SessionContext,
    store: Arc<dyn RecipeStore>,
    navigator: Arc<dyn Navigator>,
    config: ClientConfig,
    draft: Mutex<RecipeDraft>,
    submitting: AtomicBool,
}

impl DraftForm {
    /// Fresh form holding a default draft
    #[must_use]
    pub fn new(
        session: SessionContext,
        store: Arc<dyn RecipeStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::with_config(session, store, navigator, ClientConfig::default())
    }

    /// Fresh form with explicit configuration
    #[must_use]
    pub fn with_config(
        session: SessionContext,
        store: Arc<dyn RecipeStore>,
        navigator: Arc<dyn Navigator>,
        config: ClientConfig,
    ) -> Self {
        Self {
            session,
            store,
            navigator,
            config,
            draft: Mutex::new(RecipeDraft::new()),
            submitting: AtomicBool::new(false),
        }
    }

    /// Mutate the draft in place
    ///
    /// Every editor interaction goes through here. Operations complete (and
    /// the editors' revision counters tick) before the closure returns, in
    /// the order the user issued them; nothing batches or reorders.
    pub fn edit<R>(&self, mutate: impl FnOnce(&mut RecipeDraft) -> R) -> R {
        mutate(&mut self.draft.lock())
    }

    /// Snapshot of the current draft
    #[must_use]
    pub fn draft(&self) -> RecipeDraft {
        self.draft.lock().clone()
    }

    /// Whether a submission is outstanding
    #[inline]
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Filter the draft and write it through to the store
    ///
    /// On success the draft is discarded (reset to default) and navigation
    /// fires toward [`Route::Home`]. On any failure the draft is retained
    /// verbatim for correction and the error is returned for the caller to
    /// surface as a notification.
    ///
    /// # Errors
    ///
    /// [`SubmitError::InFlight`] when a submission is already outstanding,
    /// [`SubmitError::AuthRequired`] when no identity resolves, and
    /// [`SubmitError::Store`] when the insert is rejected.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        // Read-then-set before the first await: a second concurrent call
        // sees the flag and never reaches the store.
        if self.submitting.swap(true, Ordering::SeqCst) {
            return Err(SubmitError::InFlight);
        }

        let result = self.submit_inner().await;
        self.submitting.store(false, Ordering::SeqCst);

        match &result {
            Ok(()) => self.navigator.go_to(Route::Home),
            Err(err) => error!(error = %err, "recipe creation failed"),
        }
        result
    }

    async fn submit_inner(&self) -> Result<(), SubmitError> {
        let Some(identity) = self.session.current().await else {
            return Err(SubmitError::AuthRequired);
        };

        let record = self.draft.lock().to_record(identity.id.clone());
        info!(owner = %identity.id, title = %record.title, "creating recipe");

        let created = match self.config.submit_timeout {
            Some(bound) => tokio::time::timeout(bound, self.store.insert(record))
                .await
                .map_err(|_| {
                    StoreError::Unavailable(format!(
                        "insert timed out after {}ms",
                        bound.as_millis()
                    ))
                })??,
            None => self.store.insert(record).await?,
        };

        info!(recipe = %created.id, "recipe created");
        *self.draft.lock() = RecipeDraft::new();
        Ok(())
    }
}

impl std::fmt::Debug for DraftForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftForm")
            .field("submitting", &self.is_submitting())
            .finish_non_exhaustive()
    }
}
