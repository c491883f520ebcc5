//! Persisted recipe rows and the insert payload

use crate::id::{RecipeId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted recipe row
///
/// `id` and `created_at` are store-assigned; `owner_id` is stamped from the
/// creating session and store-validated. A row is created exactly once and
/// never edited or deleted by this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Store-assigned unique id
    pub id: RecipeId,
    /// Recipe title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Ordered ingredient lines; blank entries never reach storage
    pub ingredients: Vec<String>,
    /// Ordered instruction steps; blank entries never reach storage
    pub instructions: Vec<String>,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Servings the recipe yields
    pub servings: u32,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Identity that created the row, immutable
    pub owner_id: UserId,
    /// Store-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Whether `owner` created this row
    #[inline]
    #[must_use]
    pub fn is_owned_by(&self, owner: &UserId) -> bool {
        self.owner_id == *owner
    }
}

/// Insert payload for one new recipe
///
/// Exactly the [`Recipe`] fields minus the store-assigned `id` and
/// `created_at`. The list fields arrive already filtered; producing this
/// value goes through [`RecipeDraft::to_record`](crate::draft::RecipeDraft::to_record),
/// which owns the filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    /// Recipe title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Ordered ingredient lines, no blanks
    pub ingredients: Vec<String>,
    /// Ordered instruction steps, no blanks
    pub instructions: Vec<String>,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Servings the recipe yields
    pub servings: u32,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Creating identity; the store validates this against the session
    pub owner_id: UserId,
}
