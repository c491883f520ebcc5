//! Remote data store contract

use async_trait::async_trait;

use recipeshare_model::{NewRecipe, Recipe, UserId};

use crate::error::StoreError;

/// Remote relational table holding recipes
///
/// The transport is opaque to the core; the only bit-exact contract the
/// client owns is the [`NewRecipe`] payload shape. `id` and `created_at`
/// come back store-assigned, and `owner_id` is store-validated against the
/// inserting session.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Insert one recipe as a single atomic write
    async fn insert(&self, record: NewRecipe) -> Result<Recipe, StoreError>;

    /// All recipes owned by `owner`, newest first
    ///
    /// Ordered by `created_at` descending; rows with equal timestamps keep
    /// the store's native insertion order.
    async fn select_owned(&self, owner: &UserId) -> Result<Vec<Recipe>, StoreError>;
}
