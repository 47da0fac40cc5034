//! Contact field rules for client records.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Whether `email` is a syntactically valid address with a dotted domain.
///
/// The RFC check is delegated to `validator`; on top of it the domain must
/// contain a `.` because client mail always goes to a public domain
/// (`local@domain.tld`). Surrounding whitespace is not stripped; a padded
/// address is invalid as stored.
pub fn is_valid_email(email: &str) -> bool {
    if email.trim() != email || !ValidateEmail::validate_email(&email) {
        return false;
    }
    match email.rsplit_once('@') {
        Some((_, domain)) => domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

/// Validate an email field, naming it in the error.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !is_valid_email(email) {
        return Err(CoreError::Validation(format!(
            "email '{email}' is not a valid address"
        )));
    }
    Ok(())
}
