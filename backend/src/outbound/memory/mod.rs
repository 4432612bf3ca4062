//! In-memory repositories.
//!
//! Both stores live for the lifetime of the process and are shared with the
//! HTTP layer behind `Arc`. Nothing is written to durable storage.

mod recipe_store;
mod user_store;

pub use recipe_store::InMemoryRecipeRepository;
pub use user_store::InMemoryUserRepository;
