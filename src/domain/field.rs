//! Generic validated field.
//!
//! Every value a record holds is a [`Field`]: one value plus the rule that
//! admitted it. The rule is a zero-sized type parameter, so a `Name` and a
//! `Phone` are the same struct with different construction checks and cannot
//! be mixed up at compile time.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Identifies which rule a field was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// No validation beyond holding a value.
    Plain,

    /// Contact name (non-blank text).
    Name,

    /// Phone number (10 decimal digits).
    Phone,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Plain => "plain",
            Self::Name => "name",
            Self::Phone => "phone",
        };
        f.write_str(label)
    }
}

/// A construction-time validation rule for values of type `T`.
pub trait FieldRule<T: ?Sized> {
    /// Tag reported by [`Field::kind`].
    const KIND: FieldKind;

    /// Check a candidate value.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` when the value is rejected.
    fn check(value: &T) -> Result<(), ValidationError>;
}

/// Rule that accepts every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unchecked;

impl<T: ?Sized> FieldRule<T> for Unchecked {
    const KIND: FieldKind = FieldKind::Plain;

    fn check(_value: &T) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A single value admitted by rule `R`.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, FieldKind, Phone};
///
/// let plain = Field::plain(42);
/// assert_eq!(plain.to_string(), "42");
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.kind(), FieldKind::Phone);
/// assert!(Phone::new("12345").is_err());
/// ```
pub struct Field<T, R = Unchecked> {
    value: T,
    rule: PhantomData<fn() -> R>,
}

impl<T, R: FieldRule<T>> Field<T, R> {
    /// Create a new field, validating the value against `R`.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` if the value is rejected.
    pub fn new(value: impl Into<T>) -> Result<Self, ValidationError> {
        let value = value.into();
        R::check(&value)?;
        Ok(Self {
            value,
            rule: PhantomData,
        })
    }

    /// Overwrite the stored value in place.
    ///
    /// The new value is validated first; on error the field is unchanged.
    pub fn set(&mut self, value: impl Into<T>) -> Result<(), ValidationError> {
        let value = value.into();
        R::check(&value)?;
        self.value = value;
        Ok(())
    }

    /// Which rule admitted this field.
    pub fn kind(&self) -> FieldKind {
        R::KIND
    }
}

impl<T, R> Field<T, R> {
    /// Get the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Convert into the underlying value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Field<T, Unchecked> {
    /// Wrap a value without validation.
    pub fn plain(value: T) -> Self {
        Self {
            value,
            rule: PhantomData,
        }
    }
}

impl<T> From<T> for Field<T, Unchecked> {
    fn from(value: T) -> Self {
        Self::plain(value)
    }
}

impl<R> Field<String, R> {
    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<R> AsRef<str> for Field<String, R> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<T: Clone, R> Clone for Field<T, R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            rule: PhantomData,
        }
    }
}

impl<T: PartialEq, R> PartialEq for Field<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, R> Eq for Field<T, R> {}

impl<R> PartialEq<str> for Field<String, R> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<R> PartialEq<&str> for Field<String, R> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<T: Hash, R> Hash for Field<T, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, R: FieldRule<T>> fmt::Debug for Field<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("kind", &R::KIND)
            .field("value", &self.value)
            .finish()
    }
}

// Display support
impl<T: fmt::Display, R> fmt::Display for Field<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// Serde support - serialize as the bare value
impl<T: Serialize, R> Serialize for Field<T, R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize the bare value, then validate
impl<'de, T, R> Deserialize<'de> for Field<T, R>
where
    T: Deserialize<'de>,
    R: FieldRule<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
