//! The signed-in user's recipe list

use std::sync::Arc;

use tracing::{debug, error};

use recipeshare_model::{Recipe, RecipeSummary};

use crate::auth::SessionContext;
use crate::config::ClientConfig;
use crate::error::StoreError;
use crate::nav::{Navigator, Route};
use crate::store::RecipeStore;

/// What the list view should render right now
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Fetch outstanding; show a loading indicator and nothing else
    Loading,
    /// Fetch settled with no owned rows; show the create call-to-action
    Empty,
    /// One card per owned recipe, query order preserved
    Loaded(Vec<RecipeSummary>),
}

/// Outcome of one [`OwnedRecipeList::load`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Rows fetched (possibly zero)
    Loaded,
    /// No identity; the view is suspended and the user sent to sign-in
    RedirectedToSignIn,
    /// Select failed; logged only, list left empty
    Failed,
}

/// Fetches and holds every recipe owned by the current identity
///
/// `load()` runs once per view instance, when the session reports an
/// identity. Unauthenticated access redirects instead of loading.
pub struct OwnedRecipeList {
    session: SessionContext,
    store: Arc<dyn RecipeStore>,
    navigator: Arc<dyn Navigator>,
    config: ClientConfig,
    recipes: Vec<Recipe>,
    loading: bool,
}

impl OwnedRecipeList {
    /// Fresh list view: no rows yet, loading
    #[must_use]
    pub fn new(
        session: SessionContext,
        store: Arc<dyn RecipeStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::with_config(session, store, navigator, ClientConfig::default())
    }

    /// Fresh list view with explicit configuration
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
            recipes: Vec::new(),
            loading: true,
        }
    }

    /// Whether the initial fetch is still outstanding
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Owned rows, newest first
    #[inline]
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Fetch the owned rows once
    ///
    /// Signed-out: redirect to sign-in without selecting; the view stays
    /// suspended. Signed-in: one select, scoped to the identity. A failed
    /// select degrades to an empty list and is logged only - no retry, no
    /// error UI (deliberately asymmetric with the submit path, which
    /// surfaces its error).
    pub async fn load(&mut self) -> LoadOutcome {
        let Some(identity) = self.session.current().await else {
            debug!("owned-recipe list requested while signed out, redirecting");
            self.navigator.go_to(Route::SignIn);
            return LoadOutcome::RedirectedToSignIn;
        };

        let fetched = match self.config.load_timeout {
            Some(bound) => {
                match tokio::time::timeout(bound, self.store.select_owned(&identity.id)).await {
                    Ok(result) => result,
                    Err(_) => Err(StoreError::Unavailable(format!(
                        "select timed out after {}ms",
                        bound.as_millis()
                    ))),
                }
            }
            None => self.store.select_owned(&identity.id).await,
        };

        self.loading = false;
        match fetched {
            Ok(rows) => {
                debug!(owner = %identity.id, count = rows.len(), "owned recipes loaded");
                self.recipes = rows;
                LoadOutcome::Loaded
            }
            Err(err) => {
                error!(error = %err, "failed to fetch owned recipes");
                LoadOutcome::Failed
            }
        }
    }

    /// Rendering contract for the enclosing view
    #[must_use]
    pub fn view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if self.recipes.is_empty() {
            ListView::Empty
        } else {
            ListView::Loaded(self.recipes.iter().map(RecipeSummary::project).collect())
        }
    }
}

impl std::fmt::Debug for OwnedRecipeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedRecipeList")
            .field("loading", &self.loading)
            .field("recipes", &self.recipes.len())
            .finish_non_exhaustive()
    }
}
