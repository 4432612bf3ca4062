//! User data model.
//!
//! Users are seeded once at startup and never change afterwards, so the type
//! only offers constructors and read accessors.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`User::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The first name was empty or whitespace.
    #[error("first name must not be empty")]
    EmptyFirstName,
    /// The last name was empty or whitespace.
    #[error("last name must not be empty")]
    EmptyLastName,
    /// The identifier was not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a hyphenated UUID string.
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError::InvalidId`] when `id` is not a UUID.
    pub fn parse(id: &str) -> Result<Self, UserValidationError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Application user.
///
/// ## Invariants
/// - `first_name` and `last_name` are non-empty once trimmed.
/// - The JSON form has exactly the keys `id`, `firstName`, `lastName` and
///   `birthYear`.
///
/// # Examples
/// ```
/// use recipe_backend::domain::{User, UserId};
/// use uuid::Uuid;
///
/// let user = User::try_new(UserId::from_uuid(Uuid::nil()), "Ada", "Lovelace", 1815)
///     .expect("valid user");
/// assert_eq!(user.first_name(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    birth_year: i32,
}

impl User {
    /// Fallible constructor enforcing the name invariants.
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError`] when either name is blank.
    pub fn try_new(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_year: i32,
    ) -> Result<Self, UserValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        if first_name.trim().is_empty() {
            return Err(UserValidationError::EmptyFirstName);
        }
        if last_name.trim().is_empty() {
            return Err(UserValidationError::EmptyLastName);
        }
        Ok(Self {
            id,
            first_name,
            last_name,
            birth_year,
        })
    }

    /// Stable user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Year of birth.
    #[must_use]
    pub const fn birth_year(&self) -> i32 {
        self.birth_year
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UserDto {
    id: String,
    first_name: String,
    last_name: String,
    birth_year: i32,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            birth_year,
        } = value;
        Self {
            id: id.to_string(),
            first_name,
            last_name,
            birth_year,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let id = UserId::parse(&value.id)?;
        Self::try_new(id, value.first_name, value.last_name, value.birth_year)
    }
}
