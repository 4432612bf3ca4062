//! Driving port for recipe mutations.
//!
//! Inbound adapters call this port to create, replace and delete recipes
//! without reaching into the store.

use async_trait::async_trait;

use crate::domain::{Error, Recipe, RecipeDraft, RecipeId};

/// Domain use-case port for changing the recipe collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipesCommand: Send + Sync {
    /// Create a recipe and return it with its assigned identifier.
    async fn create_recipe(&self, draft: RecipeDraft) -> Result<Recipe, Error>;

    /// Replace the name and checked flag of an existing recipe.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] for an unknown id.
    async fn update_recipe(&self, id: &RecipeId, draft: RecipeDraft) -> Result<Recipe, Error>;

    /// Delete a recipe.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] for an unknown id.
    async fn delete_recipe(&self, id: &RecipeId) -> Result<(), Error>;
}
