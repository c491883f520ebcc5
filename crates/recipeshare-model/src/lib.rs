//! RecipeShare domain model
//!
//! Data types shared by every client surface:
//! - Persisted [`Recipe`] rows and the [`NewRecipe`] insert payload
//! - The transient [`RecipeDraft`] behind the authoring form
//! - The ordered field-list editor backing the ingredient and
//!   instruction lists
//! - Read-only [`RecipeSummary`] projections for list rendering
//!
//! Everything here is synchronous and collaborator-free; the workflows in
//! `recipeshare-client` drive these types against the remote services.

pub mod draft;
pub mod editor;
pub mod id;
pub mod identity;
pub mod recipe;
pub mod summary;

// Re-exports for convenience
pub use draft::{parse_positive, RecipeDraft, DEFAULT_COOKING_TIME_MINS, DEFAULT_SERVINGS};
pub use editor::{ListEditor, SlotValue};
pub use id::{RecipeId, UserId};
pub use identity::Identity;
pub use recipe::{NewRecipe, Recipe};
pub use summary::{ImageSlot, RecipeSummary, DESCRIPTION_PREVIEW_CHARS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
