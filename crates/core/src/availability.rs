//! Person availability.
//!
//! Availability is free text entered by staff. A person counts as free when
//! the text contains the Slovak word for "available" in either gender form.

/// Masculine form of "available".
pub const AVAILABLE_MASCULINE: &str = "Voľný";

/// Feminine form of "available".
pub const AVAILABLE_FEMININE: &str = "Voľná";

/// Default availability for a newly created person.
pub const DEFAULT_AVAILABILITY: &str = AVAILABLE_MASCULINE;

/// Whether an availability string marks the person as free for assignment.
pub fn is_available(availability: &str) -> bool {
    availability.contains(AVAILABLE_MASCULINE) || availability.contains(AVAILABLE_FEMININE)
}
