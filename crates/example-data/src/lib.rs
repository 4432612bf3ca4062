//! Deterministic example data for seeding the recipe service.
//!
//! This crate turns a JSON seed registry into the records the backend loads
//! at startup: a fixed list of starter recipes and a reproducible set of
//! users generated from a named RNG seed. It is independent of backend domain
//! types so the backend can map the output onto its own entities.
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_users};
//!
//! let json = r#"{
//!     "version": 1,
//!     "recipes": [{"name": "boiled white rice", "checked": false}],
//!     "seeds": [{"name": "test-seed", "seed": 42, "userCount": 3}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let users = generate_example_users(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(users.len(), 3);
//! assert_eq!(registry.recipes().len(), 1);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_example_users;
pub use registry::{BirthYearRange, SeedDefinition, SeedRegistry};
pub use seed::{ExampleRecipeSeed, ExampleUserSeed};
pub use validation::{PERSON_NAME_MAX, is_valid_person_name};
