//! Error types for the example-data crate.
//!
//! Registry parsing and user generation fail with separate `thiserror` enums
//! so callers can tell a bad registry file from an exhausted generator.

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry lists no starter recipes.
    #[error("registry contains no recipes")]
    EmptyRecipes,

    /// A starter recipe has a blank name.
    #[error("recipe at index {index} has a blank name")]
    BlankRecipeName {
        /// Index of the offending recipe in the array.
        index: usize,
    },

    /// The birth year range is inverted.
    #[error("birth year range is inverted: earliest {earliest} is after latest {latest}")]
    InvalidBirthYearRange {
        /// Earliest permitted birth year.
        earliest: i32,
        /// Latest permitted birth year.
        latest: i32,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// A seed asks for zero users.
    #[error("seed '{name}' must request at least one user")]
    ZeroUserCount {
        /// Name of the offending seed.
        name: String,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during user generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid person name after maximum retries.
    #[error("failed to generate valid person name after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        RegistryError::ParseError { message: "unexpected token".to_owned() },
        "invalid registry JSON: unexpected token"
    )]
    #[case(
        RegistryError::UnsupportedVersion { expected: 1, actual: 2 },
        "unsupported registry version: expected 1, found 2"
    )]
    #[case(RegistryError::EmptyRecipes, "registry contains no recipes")]
    #[case(
        RegistryError::BlankRecipeName { index: 3 },
        "recipe at index 3 has a blank name"
    )]
    #[case(
        RegistryError::InvalidBirthYearRange { earliest: 2000, latest: 1990 },
        "birth year range is inverted: earliest 2000 is after latest 1990"
    )]
    #[case(
        RegistryError::ZeroUserCount { name: "mossy-owl".to_owned() },
        "seed 'mossy-owl' must request at least one user"
    )]
    #[case(
        RegistryError::SeedNotFound { name: "mossy-owl".to_owned() },
        "seed 'mossy-owl' not found in registry"
    )]
    fn registry_errors_format_for_operators(#[case] err: RegistryError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn generation_error_reports_attempts() {
        let err = GenerationError::NameGenerationFailed { max_attempts: 100 };
        assert_eq!(
            err.to_string(),
            "failed to generate valid person name after 100 attempts"
        );
    }
}
