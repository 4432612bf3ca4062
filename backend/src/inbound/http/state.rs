//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on driving
//! ports, so they can be exercised with mocks and no store at all.

use std::sync::Arc;

use crate::domain::ports::{RecipesCommand, RecipesQuery, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub recipes: Arc<dyn RecipesCommand>,
    pub recipes_query: Arc<dyn RecipesQuery>,
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use recipe_backend::domain::{RecipeDraft, RecipeService, User, UsersService};
    /// use recipe_backend::inbound::http::state::HttpState;
    /// use recipe_backend::outbound::memory::{InMemoryRecipeRepository, InMemoryUserRepository};
    ///
    /// let recipes = Arc::new(RecipeService::new(Arc::new(InMemoryRecipeRepository::seeded([
    ///     RecipeDraft::new("milkshake", false),
    /// ]))));
    /// let users = Arc::new(UsersService::new(Arc::new(InMemoryUserRepository::new(Vec::<User>::new()))));
    /// let state = HttpState::new(recipes.clone(), recipes, users);
    /// let _query = state.recipes_query.clone();
    /// ```
    pub fn new(
        recipes: Arc<dyn RecipesCommand>,
        recipes_query: Arc<dyn RecipesQuery>,
        users: Arc<dyn UsersQuery>,
    ) -> Self {
        Self {
            recipes,
            recipes_query,
            users,
        }
    }
}
