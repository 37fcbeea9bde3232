//! Name value object.

use super::errors::ValidationError;
use super::field::{Field, FieldKind, FieldRule};

/// Rule admitting any text that is not blank.
///
/// The value is checked after trimming but stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NameRule;

impl FieldRule<String> for NameRule {
    const KIND: FieldKind = FieldKind::Name;

    fn check(value: &String) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// A validated contact name.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// assert!(Name::new("   ").is_err());
/// ```
pub type Name = Field<String, NameRule>;
