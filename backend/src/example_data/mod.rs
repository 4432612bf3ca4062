//! Startup seeding of the in-memory stores.

mod config;
mod startup;

pub use config::ExampleDataSettings;
pub use startup::{
    SeededStores, StartupSeedingError, example_recipes, example_users, seed_stores_on_startup,
};
