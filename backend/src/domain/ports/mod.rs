//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`RecipesCommand`, `RecipesQuery`, `UsersQuery`) are called
//! by inbound adapters. Driven ports (`RecipeRepository`, `UserRepository`)
//! are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod recipe_repository;
mod recipes_command;
mod recipes_query;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{RecipeRepository, RecipeRepositoryError};
#[cfg(test)]
pub use recipes_command::MockRecipesCommand;
pub use recipes_command::RecipesCommand;
#[cfg(test)]
pub use recipes_query::MockRecipesQuery;
pub use recipes_query::RecipesQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
