//! Recipe domain service.
//!
//! Implements the recipe driving ports over a [`RecipeRepository`], turning
//! absent records into `NotFound` and store failures into `InternalError`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{
    RecipeRepository, RecipeRepositoryError, RecipesCommand, RecipesQuery,
};
use crate::domain::{Error, Recipe, RecipeDraft, RecipeId};

fn map_repository_error(err: RecipeRepositoryError) -> Error {
    error!(error = %err, "recipe repository failure");
    match err {
        RecipeRepositoryError::Unavailable { message } => {
            Error::internal(format!("recipe repository unavailable: {message}"))
        }
    }
}

fn recipe_not_found(id: &RecipeId) -> Error {
    Error::not_found(format!("recipe {id} not found"))
}

/// Recipe service implementing [`RecipesCommand`] and [`RecipesQuery`].
#[derive(Clone)]
pub struct RecipeService<R> {
    recipes: Arc<R>,
}

impl<R> RecipeService<R> {
    /// Create a service backed by `recipes`.
    pub const fn new(recipes: Arc<R>) -> Self {
        Self { recipes }
    }
}

#[async_trait]
impl<R> RecipesQuery for RecipeService<R>
where
    R: RecipeRepository,
{
    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error> {
        self.recipes.list().await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> RecipesCommand for RecipeService<R>
where
    R: RecipeRepository,
{
    async fn create_recipe(&self, draft: RecipeDraft) -> Result<Recipe, Error> {
        let recipe = self
            .recipes
            .insert(draft)
            .await
            .map_err(map_repository_error)?;
        debug!(recipe_id = %recipe.id(), "recipe created");
        Ok(recipe)
    }

    async fn update_recipe(&self, id: &RecipeId, draft: RecipeDraft) -> Result<Recipe, Error> {
        let recipe = self
            .recipes
            .update(id, draft)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| recipe_not_found(id))?;
        debug!(recipe_id = %id, "recipe updated");
        Ok(recipe)
    }

    async fn delete_recipe(&self, id: &RecipeId) -> Result<(), Error> {
        self.recipes
            .remove(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| recipe_not_found(id))?;
        debug!(recipe_id = %id, "recipe deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "recipe_service_tests.rs"]
mod tests;
