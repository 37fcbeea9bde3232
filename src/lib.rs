//! Address Book - an in-memory contact directory.
//!
//! Records hold a validated name and any number of validated phone numbers;
//! the address book keys them by name and renders them as text.
//!
//! # Architecture
//!
//! - **domain**: The generic validated `Field` and the name/phone rules
//! - **models**: `Record`, one contact with its phones
//! - **directory**: `AddressBook`, the insertion-ordered collection of records
//! - **matching**: Fuzzy name search over records
//! - **error**: Error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;

pub use config::Config;
pub use directory::{AddressBook, RecordMut};
pub use domain::{Field, FieldKind, Name, Phone, ValidationError};
pub use error::ConfigError;
pub use matching::{MatchResult, NameMatcher};
pub use models::Record;
