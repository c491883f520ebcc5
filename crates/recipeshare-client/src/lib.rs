//! RecipeShare client core
//!
//! The authoring and retrieval workflow behind the RecipeShare app:
//! - [`SessionContext`]: process-wide reactive view of the signed-in
//!   identity; provider failures degrade to signed-out
//! - [`DraftForm`]: the recipe creation form - two ordered list editors
//!   plus scalar fields, with race-free submission
//! - [`OwnedRecipeList`]: the signed-in user's recipes, newest first, with
//!   auth-gated loading
//!
//! External collaborators - the identity service, the recipe table, and the
//! host router - enter through the [`IdentityProvider`], [`RecipeStore`],
//! and [`Navigator`] traits, so every workflow runs unchanged against the
//! in-memory fakes in `recipeshare-test-utils`.
//!
//! # Example
//!
//! ```rust,ignore
//! use recipeshare_client::prelude::*;
//!
//! # async fn example(session: SessionContext, store: std::sync::Arc<dyn RecipeStore>, nav: std::sync::Arc<dyn Navigator>) -> Result<(), SubmitError> {
//! let form = DraftForm::new(session, store, nav);
//! form.edit(|draft| {
//!     draft.title = "Soup".to_string();
//!     draft.ingredients.update_at(0, "salt".to_string());
//! });
//! form.submit().await?;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod my_recipes;
pub mod nav;
pub mod store;

// Re-exports for convenience
pub use auth::{IdentityProvider, SessionContext};
pub use config::ClientConfig;
pub use error::{IdentityError, StoreError, SubmitError};
pub use form::DraftForm;
pub use my_recipes::{ListView, LoadOutcome, OwnedRecipeList};
pub use nav::{Navigator, Route};
pub use store::RecipeStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the client workflows
    pub use crate::{
        ClientConfig, DraftForm, IdentityProvider, ListView, LoadOutcome, Navigator,
        OwnedRecipeList, RecipeStore, Route, SessionContext, SubmitError,
    };
    pub use recipeshare_model::{
        Identity, ListEditor, NewRecipe, Recipe, RecipeDraft, RecipeSummary, UserId,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
