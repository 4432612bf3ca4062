//! Seed record types produced by this crate.
//!
//! These mirror the backend's `User` and recipe draft shapes without
//! depending on them; the backend converts at the point of use.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated example user record.
///
/// # Example
///
/// ```
/// use example_data::ExampleUserSeed;
/// use uuid::Uuid;
///
/// let user = ExampleUserSeed {
///     id: Uuid::nil(),
///     first_name: "Ada".to_owned(),
///     last_name: "Lovelace".to_owned(),
///     birth_year: 1815,
/// };
///
/// assert_eq!(user.last_name, "Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// Unique identifier for the user.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Year of birth.
    pub birth_year: i32,
}

/// A starter recipe listed in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRecipeSeed {
    /// Recipe name shown to clients.
    pub name: String,
    /// Whether the recipe starts out checked.
    #[serde(default)]
    pub checked: bool,
}
