//! Request payload validation.
//!
//! Create/update DTOs implement [`ValidateInput`] so the HTTP layer can
//! reject a malformed body with a 400 before any query is built. The
//! helpers below are the field-level rules those implementations compose.

use crate::error::CoreError;

/// A payload that can check its own field-level invariants.
pub trait ValidateInput {
    /// Return `CoreError::Validation` describing the first violated rule.
    fn validate(&self) -> Result<(), CoreError>;
}

/// Require a text field to contain at least one non-whitespace character.
pub fn require_non_blank(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Require a monetary amount to be finite and not negative.
pub fn validate_non_negative(value: f64, field: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Require an integer to fall within `[min, max]`.
pub fn validate_int_range(value: i32, min: i32, max: i32, field: &str) -> Result<(), CoreError> {
    if !(min..=max).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Require every tag in a list to be non-blank.
pub fn validate_tags(tags: &[String], field: &str) -> Result<(), CoreError> {
    if tags.iter().any(|t| t.trim().is_empty()) {
        return Err(CoreError::Validation(format!(
            "{field} must not contain blank entries"
        )));
    }
    Ok(())
}
