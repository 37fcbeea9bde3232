//! Domain value objects and types.
//!
//! This module contains the generic validated [`Field`] and the rules that
//! specialize it into contact names and phone numbers. Invalid values are
//! rejected at construction time and cannot be represented in a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::{Field, FieldKind, FieldRule, Unchecked};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule};
