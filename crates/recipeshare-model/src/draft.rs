//! Transient authoring state behind the recipe form

use crate::editor::ListEditor;
use crate::id::UserId;
use crate::recipe::NewRecipe;

/// Cooking time a fresh draft starts with, in minutes
pub const DEFAULT_COOKING_TIME_MINS: u32 = 30;

/// Servings a fresh draft starts with
pub const DEFAULT_SERVINGS: u32 = 4;

/// In-progress recipe being edited
///
/// Mirrors the editable [`Recipe`](crate::recipe::Recipe) fields, except
/// that the lists may transiently hold blank slots while the user types and
/// always keep at least one slot so the form never renders zero rows.
/// Lifecycle: created with defaults, mutated in place by every editor
/// interaction, discarded on successful submit, retained for correction on
/// a failed one.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    /// Recipe title as typed
    pub title: String,
    /// Description as typed
    pub description: String,
    /// Ingredient slots
    pub ingredients: ListEditor<String>,
    /// Instruction slots
    pub instructions: ListEditor<String>,
    cooking_time: u32,
    servings: u32,
    image_url: String,
}

impl RecipeDraft {
    /// Fresh draft: one blank slot per list, default scalars
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            ingredients: ListEditor::new(),
            instructions: ListEditor::new(),
            cooking_time: DEFAULT_COOKING_TIME_MINS,
            servings: DEFAULT_SERVINGS,
            image_url: String::new(),
        }
    }

    /// Cooking time in minutes, always at least 1
    #[inline]
    #[must_use]
    pub fn cooking_time(&self) -> u32 {
        self.cooking_time
    }

    /// Servings, always at least 1
    #[inline]
    #[must_use]
    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Set cooking time, clamped to a minimum of 1
    pub fn set_cooking_time(&mut self, minutes: u32) {
        self.cooking_time = minutes.max(1);
    }

    /// Set servings, clamped to a minimum of 1
    pub fn set_servings(&mut self, servings: u32) {
        self.servings = servings.max(1);
    }

    /// Apply raw numeric input to cooking time
    ///
    /// Unparsable or non-positive input leaves the field unchanged - the
    /// eventual required-field validation owns rejecting it. Nothing
    /// NaN-shaped can reach the store.
    pub fn set_cooking_time_input(&mut self, raw: &str) {
        if let Some(minutes) = parse_positive(raw) {
            self.cooking_time = minutes;
        }
    }

    /// Apply raw numeric input to servings
    ///
    /// Same deferral rules as [`set_cooking_time_input`](Self::set_cooking_time_input).
    pub fn set_servings_input(&mut self, raw: &str) {
        if let Some(servings) = parse_positive(raw) {
            self.servings = servings;
        }
    }

    /// Image URL field as typed
    #[inline]
    #[must_use]
    pub fn image_url_input(&self) -> &str {
        &self.image_url
    }

    /// Replace the image URL field
    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.image_url = url.into();
    }

    /// Image URL as submitted: blank input becomes absent
    #[must_use]
    pub fn image_url(&self) -> Option<String> {
        let trimmed = self.image_url.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Submit-time projection of this draft
    ///
    /// Blank list entries are dropped order-preservingly, the image URL is
    /// normalized, scalars are copied verbatim, and ownership is stamped
    /// from the resolved identity. All-blank lists project to empty
    /// sequences; nothing here rejects that.
    #[must_use]
    pub fn to_record(&self, owner: UserId) -> NewRecipe {
        NewRecipe {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.filled(),
            instructions: self.instructions.filled(),
            cooking_time: self.cooking_time,
            servings: self.servings,
            image_url: self.image_url(),
            owner_id: owner,
        }
    }
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse raw numeric input as a positive integer
///
/// `None` for anything unparsable or below 1.
#[must_use]
pub fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}
