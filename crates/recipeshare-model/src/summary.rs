//! Read-only projection of one recipe for list rendering

use crate::recipe::Recipe;

/// Character count approximating the card's two-line description clamp
pub const DESCRIPTION_PREVIEW_CHARS: usize = 140;

/// Image shown on a recipe card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// Render the stored image URL
    Url(String),
    /// Explicit no-image placeholder
    Placeholder,
}

impl ImageSlot {
    /// Label rendered for [`ImageSlot::Placeholder`]
    pub const PLACEHOLDER_LABEL: &'static str = "No image available";
}

/// Card-ready view of one [`Recipe`]
///
/// Pure projection: no mutation, no network access, no lifecycle beyond the
/// enclosing list's.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    /// Recipe title, untruncated
    pub title: String,
    /// Description clamped to the preview length
    pub description_preview: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Servings
    pub servings: u32,
    /// Image URL or placeholder
    pub image: ImageSlot,
}

impl RecipeSummary {
    /// Project one recipe into its card view
    #[must_use]
    pub fn project(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description_preview: truncate_preview(&recipe.description, DESCRIPTION_PREVIEW_CHARS),
            cooking_time: recipe.cooking_time,
            servings: recipe.servings,
            image: match recipe.image_url.as_deref() {
                Some(url) if !url.trim().is_empty() => ImageSlot::Url(url.to_string()),
                _ => ImageSlot::Placeholder,
            },
        }
    }
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self::project(recipe)
    }
}

/// Clamp `text` to `max_chars`, appending an ellipsis when clipped
///
/// Cuts on a char boundary; trailing whitespace before the ellipsis is
/// trimmed.
fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{}…", clipped.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{RecipeId, UserId};
    use chrono::Utc;

    fn recipe_with(description: &str, image_url: Option<&str>) -> Recipe {
        Recipe {
            id: RecipeId::new(),
            title: "Soup".to_string(),
            description: description.to_string(),
            ingredients: vec!["salt".to_string()],
            instructions: vec!["Boil".to_string()],
            cooking_time: 10,
            servings: 2,
            image_url: image_url.map(str::to_string),
            owner_id: UserId::from("u1"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn short_description_passes_through() {
        let summary = RecipeSummary::project(&recipe_with("Warm", None));
        assert_eq!(summary.description_preview, "Warm");
    }

    #[test]
    fn long_description_is_clamped_with_ellipsis() {
        let long = "a".repeat(300);
        let summary = RecipeSummary::project(&recipe_with(&long, None));
        assert_eq!(
            summary.description_preview.chars().count(),
            DESCRIPTION_PREVIEW_CHARS + 1
        );
        assert!(summary.description_preview.ends_with('…'));
    }

    #[test]
    fn missing_or_blank_image_renders_placeholder() {
        assert_eq!(
            RecipeSummary::project(&recipe_with("Warm", None)).image,
            ImageSlot::Placeholder
        );
        assert_eq!(
            RecipeSummary::project(&recipe_with("Warm", Some("  "))).image,
            ImageSlot::Placeholder
        );
        assert_eq!(
            RecipeSummary::project(&recipe_with("Warm", Some("https://x/y.jpg"))).image,
            ImageSlot::Url("https://x/y.jpg".to_string())
        );
    }
}
