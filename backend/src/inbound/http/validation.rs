//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies arrive with optional fields so a missing key surfaces as a
//! field-level `invalid_request` instead of a generic JSON error.

use serde_json::json;

use crate::domain::{Error, RecipeId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidUuid,
    IdMismatch,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::IdMismatch => "id_mismatch",
        }
    }
}

/// Newtype wrapper for request field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const ID: FieldName = FieldName::new("id");
pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const CHECKED: FieldName = FieldName::new("checked");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": ValidationCode::InvalidUuid.as_str(),
    }))
}

/// A path segment that is not a UUID cannot name a stored recipe.
pub(crate) fn unknown_path_id_error(value: &str) -> Error {
    Error::not_found(format!("recipe {value} not found")).with_details(json!({
        "field": ID.as_str(),
        "code": ValidationCode::InvalidUuid.as_str(),
    }))
}

pub(crate) fn id_mismatch_error(path_id: &RecipeId, body_id: &RecipeId) -> Error {
    Error::invalid_request("body id must match path id").with_details(json!({
        "field": ID.as_str(),
        "code": ValidationCode::IdMismatch.as_str(),
        "pathId": path_id.to_string(),
        "bodyId": body_id.to_string(),
    }))
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Only the lowercase hyphenated spelling the store issues is accepted.
fn parse_canonical_id(value: &str) -> Option<RecipeId> {
    value
        .parse::<RecipeId>()
        .ok()
        .filter(|id| id.to_string() == value)
}

pub(crate) fn parse_path_id(value: &str) -> Result<RecipeId, Error> {
    parse_canonical_id(value).ok_or_else(|| unknown_path_id_error(value))
}

pub(crate) fn parse_body_id(value: &str) -> Result<RecipeId, Error> {
    parse_canonical_id(value).ok_or_else(|| invalid_uuid_error(ID, value))
}
