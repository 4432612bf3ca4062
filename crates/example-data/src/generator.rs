//! Deterministic user generation from seed definitions.
//!
//! The same seed definition always yields the same users, so a restarted
//! process serves an identical user list.

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

use crate::error::GenerationError;
use crate::registry::{BirthYearRange, SeedDefinition, SeedRegistry};
use crate::seed::ExampleUserSeed;
use crate::validation::is_valid_person_name;

/// Maximum number of attempts to generate a valid person name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Generates example users from a seed definition.
///
/// Each user receives a v4-shaped UUID drawn from the seeded RNG, a first and
/// last name accepted by [`is_valid_person_name`], and a birth year inside the
/// registry's [`BirthYearRange`].
///
/// # Errors
///
/// Returns [`GenerationError::NameGenerationFailed`] when no valid name is
/// produced within the retry budget.
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_users};
///
/// let json = r#"{
///     "version": 1,
///     "recipes": [{"name": "milkshake"}],
///     "seeds": [{"name": "test", "seed": 42, "userCount": 3}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let users = generate_example_users(&registry, seed_def).expect("generated");
///
/// assert_eq!(users.len(), 3);
/// let again = generate_example_users(&registry, seed_def).expect("generated");
/// assert_eq!(users, again);
/// ```
pub fn generate_example_users(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<Vec<ExampleUserSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let birth_years = registry.birth_years();

    (0..seed_def.user_count())
        .map(|_| generate_single_user(&mut rng, birth_years))
        .collect()
}

fn generate_single_user(
    rng: &mut ChaCha8Rng,
    birth_years: BirthYearRange,
) -> Result<ExampleUserSeed, GenerationError> {
    let id = random_uuid(rng);
    let first_name = generate_name(rng, |rng| FirstName(EN).fake_with_rng(rng))?;
    let last_name = generate_name(rng, |rng| LastName(EN).fake_with_rng(rng))?;
    let birth_year = rng.random_range(birth_years.earliest()..=birth_years.latest());

    Ok(ExampleUserSeed {
        id,
        first_name,
        last_name,
        birth_year,
    })
}

fn random_uuid(rng: &mut ChaCha8Rng) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}

/// Draws names from `source` until one passes validation.
fn generate_name<F>(rng: &mut ChaCha8Rng, source: F) -> Result<String, GenerationError>
where
    F: Fn(&mut ChaCha8Rng) -> String,
{
    (0..MAX_NAME_ATTEMPTS)
        .map(|_| source(rng))
        .find(|candidate| is_valid_person_name(candidate))
        .ok_or(GenerationError::NameGenerationFailed {
            max_attempts: MAX_NAME_ATTEMPTS,
        })
}
