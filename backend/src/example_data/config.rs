//! Seed selection settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

pub(crate) const DEFAULT_SEED_NAME: &str = "mossy-owl";

pub(crate) fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("seeds.json")
}

/// Settings controlling which registry and seed populate the stores.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed name to load from the registry.
    pub seed_name: Option<String>,
    /// Override for the number of users generated.
    #[ortho_config(file_key = "user_count")]
    pub count: Option<usize>,
    /// Registry path override.
    pub registry_path: Option<PathBuf>,
}

impl ExampleDataSettings {
    /// Configured seed name, falling back to `mossy-owl`.
    pub fn seed_name(&self) -> &str {
        self.seed_name.as_deref().unwrap_or(DEFAULT_SEED_NAME)
    }

    /// Configured registry path, falling back to the bundled fixture.
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }
}
