//! Driving port for recipe reads.

use async_trait::async_trait;

use crate::domain::{Error, Recipe};

/// Domain use-case port for listing recipes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipesQuery: Send + Sync {
    /// Every recipe in insertion order.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error>;
}
