//! Startup seeding orchestration.
//!
//! Reads the seed registry through a capability handle on its parent
//! directory, then builds both in-memory stores from it. Any failure here
//! aborts startup.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use example_data::{GenerationError, RegistryError, SeedRegistry, generate_example_users};
use thiserror::Error;
use tracing::info;

use crate::domain::{RecipeDraft, User, UserId, UserValidationError};
use crate::example_data::config::ExampleDataSettings;
use crate::outbound::memory::{InMemoryRecipeRepository, InMemoryUserRepository};

/// Errors returned while seeding the stores at startup.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing or seed lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// User generation failed.
    #[error("user generation error: {0}")]
    Generation(#[from] GenerationError),
    /// A generated user violated the domain invariants.
    #[error("generated user is invalid: {0}")]
    InvalidUser(#[from] UserValidationError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Stores populated from the registry.
#[derive(Debug)]
pub struct SeededStores {
    /// Recipe Store holding the registry's starter recipes.
    pub recipes: InMemoryRecipeRepository,
    /// User Store holding the generated users.
    pub users: InMemoryUserRepository,
}

/// Starter recipes in registry order.
pub fn example_recipes(registry: &SeedRegistry) -> Vec<RecipeDraft> {
    registry
        .recipes()
        .iter()
        .map(|recipe| RecipeDraft::new(recipe.name.clone(), recipe.checked))
        .collect()
}

/// Generate the users for `seed_name`, applying an optional count override.
///
/// # Errors
///
/// Fails when the seed is unknown, the override is zero, generation gives up
/// or a generated user is rejected by [`User::try_new`].
pub fn example_users(
    registry: &SeedRegistry,
    seed_name: &str,
    count: Option<usize>,
) -> Result<Vec<User>, StartupSeedingError> {
    let seed_def = registry.find_seed(seed_name)?;
    let seed_def = match count {
        Some(count) => seed_def.with_user_count(count)?,
        None => seed_def.clone(),
    };
    generate_example_users(registry, &seed_def)?
        .into_iter()
        .map(|seed| {
            User::try_new(
                UserId::from_uuid(seed.id),
                seed.first_name,
                seed.last_name,
                seed.birth_year,
            )
            .map_err(StartupSeedingError::from)
        })
        .collect()
}

/// Load the registry named by `settings` and build both stores.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::PathBuf;
///
/// use recipe_backend::example_data::{ExampleDataSettings, seed_stores_on_startup};
///
/// let settings = ExampleDataSettings {
///     seed_name: Some("mossy-owl".to_owned()),
///     count: None,
///     registry_path: Some(PathBuf::from("backend/fixtures/example-data/seeds.json")),
/// };
/// let stores = seed_stores_on_startup(&settings).expect("seeding succeeds");
/// assert!(!stores.users.is_empty());
/// ```
///
/// # Errors
///
/// Returns [`StartupSeedingError`] when the registry cannot be read or
/// parsed, or the seed cannot produce users.
pub fn seed_stores_on_startup(
    settings: &ExampleDataSettings,
) -> Result<SeededStores, StartupSeedingError> {
    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let registry_path = settings.registry_path();
    let registry = load_registry(&registry_path)?;
    let recipes = example_recipes(&registry);
    let users = example_users(&registry, seed_name, settings.count)?;

    info!(
        registry = %registry_path.display(),
        seed_key = seed_name,
        recipe_count = recipes.len(),
        user_count = users.len(),
        "example data seeded"
    );

    Ok(SeededStores {
        recipes: InMemoryRecipeRepository::seeded(recipes),
        users: InMemoryUserRepository::new(users),
    })
}

fn read_error(path: &Path, source: std::io::Error) -> StartupSeedingError {
    StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    }
}

fn load_registry(path: &Path) -> Result<SeedRegistry, StartupSeedingError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "registry path must be a file",
            ),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|source| read_error(path, source))?;
    let contents = dir
        .read_to_string(Path::new(file_name))
        .map_err(|source| read_error(path, source))?;
    Ok(SeedRegistry::from_json(&contents)?)
}
