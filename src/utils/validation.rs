//! Input validation primitives.

use crate::error::{Error, Result};

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(
            field,
            message,
            Some(value.to_string()),
        ))
    } else {
        Ok(trimmed)
    }
}

/// Reject values containing any of `forbidden`.
pub fn require_none_of(value: &str, forbidden: &[char], field: &str, message: &str) -> Result<()> {
    if value.contains(forbidden) {
        Err(Error::validation_invalid_argument(
            field,
            message,
            Some(value.to_string()),
        ))
    } else {
        Ok(())
    }
}
