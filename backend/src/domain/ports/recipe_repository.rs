//! Driven port for recipe storage.
//!
//! The store owns identifier assignment; callers hand over a
//! [`RecipeDraft`] and receive the stored [`Recipe`] back.

use async_trait::async_trait;

use crate::domain::{Recipe, RecipeDraft, RecipeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by recipe repository adapters.
    pub enum RecipeRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "recipe repository unavailable: {message}",
    }
}

/// Port for listing and mutating stored recipes.
///
/// Missing records are reported as `Ok(None)` so services decide how to
/// surface them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Snapshot of every recipe in insertion order.
    async fn list(&self) -> Result<Vec<Recipe>, RecipeRepositoryError>;

    /// Store a new recipe under a freshly issued identifier.
    async fn insert(&self, draft: RecipeDraft) -> Result<Recipe, RecipeRepositoryError>;

    /// Replace the content of an existing recipe, keeping its position.
    async fn update(
        &self,
        id: &RecipeId,
        draft: RecipeDraft,
    ) -> Result<Option<Recipe>, RecipeRepositoryError>;

    /// Remove a recipe, returning it when it existed.
    async fn remove(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeRepositoryError>;
}
