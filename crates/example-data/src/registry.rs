//! Seed registry types and JSON parsing.
//!
//! The registry names RNG seeds for user generation, bounds generated birth
//! years, and lists the starter recipes every fresh process begins with.

use serde::Deserialize;

use crate::error::RegistryError;
use crate::seed::ExampleRecipeSeed;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

const DEFAULT_EARLIEST_BIRTH_YEAR: i32 = 1940;
const DEFAULT_LATEST_BIRTH_YEAR: i32 = 2005;

/// A seed registry containing starter recipes and named user seeds.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "birthYears": {"earliest": 1950, "latest": 1990},
///     "recipes": [
///         {"name": "boiled white rice", "checked": false},
///         {"name": "milkshake", "checked": true}
///     ],
///     "seeds": [{"name": "test", "seed": 42, "userCount": 5}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.recipes().len(), 2);
/// assert_eq!(registry.birth_years().earliest(), 1950);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    birth_years: BirthYearRange,
    recipes: Vec<ExampleRecipeSeed>,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or required fields are missing
    /// - The version is unsupported
    /// - The recipe list is empty or contains a blank name
    /// - The birth year range is inverted
    /// - The seeds array is empty or a seed requests zero users
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.recipes.is_empty() {
            return Err(RegistryError::EmptyRecipes);
        }
        if let Some(index) = raw
            .recipes
            .iter()
            .position(|recipe| recipe.name.trim().is_empty())
        {
            return Err(RegistryError::BlankRecipeName { index });
        }

        let birth_years = raw
            .birth_years
            .map_or_else(BirthYearRange::default_range, |range| {
                BirthYearRange::new(range.earliest, range.latest)
            })?;

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }
        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| SeedDefinition::new(s.name, s.seed, s.user_count))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: raw.version,
            birth_years,
            recipes: raw.recipes,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the permitted birth years for generated users.
    #[must_use]
    pub const fn birth_years(&self) -> BirthYearRange {
        self.birth_years
    }

    /// Returns the starter recipes in registry order.
    #[must_use]
    pub fn recipes(&self) -> &[ExampleRecipeSeed] {
        &self.recipes
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// Inclusive range of birth years assigned to generated users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearRange {
    earliest: i32,
    latest: i32,
}

impl BirthYearRange {
    /// Builds a range, rejecting `earliest > latest`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidBirthYearRange`] for inverted bounds.
    pub const fn new(earliest: i32, latest: i32) -> Result<Self, RegistryError> {
        if earliest > latest {
            return Err(RegistryError::InvalidBirthYearRange { earliest, latest });
        }
        Ok(Self { earliest, latest })
    }

    const fn default_range() -> Result<Self, RegistryError> {
        Self::new(DEFAULT_EARLIEST_BIRTH_YEAR, DEFAULT_LATEST_BIRTH_YEAR)
    }

    /// Earliest permitted birth year.
    #[must_use]
    pub const fn earliest(&self) -> i32 {
        self.earliest
    }

    /// Latest permitted birth year.
    #[must_use]
    pub const fn latest(&self) -> i32 {
        self.latest
    }

    /// Returns `true` when `year` lies within the range.
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.earliest && year <= self.latest
    }
}

/// A named seed definition for deterministic user generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    user_count: usize,
}

impl SeedDefinition {
    fn new(name: String, seed: u64, user_count: usize) -> Result<Self, RegistryError> {
        if user_count == 0 {
            return Err(RegistryError::ZeroUserCount { name });
        }
        Ok(Self {
            name,
            seed,
            user_count,
        })
    }

    /// Returns a copy of this seed generating `user_count` users instead.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ZeroUserCount`] when `user_count` is zero.
    pub fn with_user_count(&self, user_count: usize) -> Result<Self, RegistryError> {
        Self::new(self.name.clone(), self.seed, user_count)
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of users to generate.
    #[must_use]
    pub const fn user_count(&self) -> usize {
        self.user_count
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    #[serde(default)]
    birth_years: Option<RawBirthYearRange>,
    recipes: Vec<ExampleRecipeSeed>,
    seeds: Vec<RawSeedDefinition>,
}

#[derive(Debug, Deserialize)]
struct RawBirthYearRange {
    earliest: i32,
    latest: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    user_count: usize,
}
