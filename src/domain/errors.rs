//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during field and record validation.
///
/// The `Display` form of each variant is the bare reason string, so callers
/// can surface it directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty after trimming whitespace.
    #[error("empty name")]
    EmptyName,

    /// The provided phone number is not exactly 10 decimal digits.
    #[error("invalid phone")]
    InvalidPhone(String),

    /// The phone number to edit is not stored on the record.
    #[error("old phone not found")]
    PhoneNotFound(String),
}

impl ValidationError {
    /// The offending input, if the error carries one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::EmptyName => None,
            Self::InvalidPhone(value) | Self::PhoneNotFound(value) => Some(value),
        }
    }
}
