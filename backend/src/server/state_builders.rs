//! Builds the HTTP state from the seeded stores.

use std::sync::Arc;

use actix_web::web;

use recipe_backend::domain::{RecipeService, UsersService};
use recipe_backend::example_data::SeededStores;
use recipe_backend::inbound::http::state::HttpState;

/// Wrap the stores in their services and bundle the driving ports.
pub(crate) fn build_http_state(stores: SeededStores) -> web::Data<HttpState> {
    let SeededStores { recipes, users } = stores;
    let recipes = Arc::new(RecipeService::new(Arc::new(recipes)));
    let users = Arc::new(UsersService::new(Arc::new(users)));
    web::Data::new(HttpState::new(recipes.clone(), recipes, users))
}
