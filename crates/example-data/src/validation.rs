//! Person name validation mirroring backend constraints.
//!
//! The backend rejects blank first and last names; generated names are
//! additionally restricted to letters, spaces, hyphens and apostrophes so the
//! seeded users look like people rather than faker artefacts.

/// Maximum allowed length for a first or last name.
pub const PERSON_NAME_MAX: usize = 64;

/// Validates a generated first or last name.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_person_name;
///
/// assert!(is_valid_person_name("Ada"));
/// assert!(is_valid_person_name("O'Brien"));
/// assert!(is_valid_person_name("Smith-Jones"));
/// assert!(!is_valid_person_name("   "));
/// assert!(!is_valid_person_name("R2D2"));
/// ```
#[must_use]
pub fn is_valid_person_name(name: &str) -> bool {
    let length = name.chars().count();
    if length == 0 || length > PERSON_NAME_MAX {
        return false;
    }
    if name.trim() != name || name.trim().is_empty() {
        return false;
    }
    name.chars().all(is_valid_person_name_char)
}

fn is_valid_person_name_char(c: char) -> bool {
    c.is_alphabetic() || matches!(c, ' ' | '-' | '\'')
}
