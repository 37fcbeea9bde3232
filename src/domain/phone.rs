//! Phone value object.

use super::errors::ValidationError;
use super::field::{Field, FieldKind, FieldRule};
use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly ten Unicode decimal digits (`\p{Nd}`), nothing else.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("Failed to compile phone regex"));

/// Rule admitting 10-digit phone numbers.
///
/// # Validation Rules
///
/// - Must be exactly 10 characters long
/// - Every character must be a decimal digit in any script (`0`-`9`,
///   Arabic-Indic, full-width, ...)
/// - No formatting characters, spaces or country codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhoneRule;

impl PhoneRule {
    /// Validate phone format.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }
}

impl FieldRule<String> for PhoneRule {
    const KIND: FieldKind = FieldKind::Phone;

    fn check(value: &String) -> Result<(), ValidationError> {
        if Self::is_valid(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhone(value.clone()))
        }
    }
}

/// A validated 10-digit phone number.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("5555555555").unwrap();
/// assert_eq!(phone.as_str(), "5555555555");
/// ```
pub type Phone = Field<String, PhoneRule>;
