//! Recipe data model.
//!
//! A recipe is a named entry with a `checked` flag. Identifiers are assigned
//! by the store; clients only ever supply a [`RecipeDraft`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned recipe identifier.
///
/// Serialises as a hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(Uuid);

impl RecipeId {
    /// Generate a random version 4 identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RecipeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Client-supplied recipe content used by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    /// Display name of the recipe.
    pub name: String,
    /// Whether the recipe is checked off.
    pub checked: bool,
}

impl RecipeDraft {
    /// Build a draft from its parts.
    pub fn new(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            checked,
        }
    }
}

/// A stored recipe.
///
/// The JSON form always has exactly the keys `id`, `name` and `checked`.
///
/// # Examples
/// ```
/// use recipe_backend::domain::{Recipe, RecipeDraft, RecipeId};
///
/// let id = RecipeId::random();
/// let recipe = Recipe::new(id, RecipeDraft::new("milkshake", false));
/// assert_eq!(recipe.id(), id);
/// assert_eq!(recipe.name(), "milkshake");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    id: RecipeId,
    name: String,
    checked: bool,
}

impl Recipe {
    /// Attach an identifier to a draft.
    #[must_use]
    pub fn new(id: RecipeId, draft: RecipeDraft) -> Self {
        let RecipeDraft { name, checked } = draft;
        Self { id, name, checked }
    }

    /// Replace the name and checked flag, keeping the identifier.
    pub fn apply(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.checked = draft.checked;
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> RecipeId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checked flag.
    #[must_use]
    pub const fn checked(&self) -> bool {
        self.checked
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn apply_keeps_identifier() {
        let id = RecipeId::random();
        let mut recipe = Recipe::new(id, RecipeDraft::new("tea", false));

        recipe.apply(RecipeDraft::new("green tea", true));

        assert_eq!(recipe.id(), id);
        assert_eq!(recipe.name(), "green tea");
        assert!(recipe.checked());
    }

    #[rstest]
    fn serialises_exactly_three_keys() {
        let id = RecipeId::from_uuid(Uuid::nil());
        let recipe = Recipe::new(id, RecipeDraft::new("coffee", false));

        let value = serde_json::to_value(&recipe).expect("serialise recipe");

        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "name": "coffee",
                "checked": false,
            })
        );
    }

    #[rstest]
    #[case("3fa85f64-5717-4562-b3fc-2c963f66afa6", true)]
    #[case("3fa85f64", false)]
    #[case("", false)]
    fn parses_recipe_ids(#[case] raw: &str, #[case] valid: bool) {
        assert_eq!(raw.parse::<RecipeId>().is_ok(), valid);
    }

    #[rstest]
    fn random_ids_are_version_four() {
        assert_eq!(RecipeId::random().as_uuid().get_version_num(), 4);
    }
}
