//! Address book keyed by contact name.

use crate::matching::{MatchResult, NameMatcher};
use crate::models::Record;
use super::RecordMut;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The collection of all records, keyed by name.
///
/// The map is private: every insertion goes through [`add_record`], so each
/// key always equals its record's name. Iteration and rendering follow
/// insertion order, and deleting an entry does not reorder the rest.
///
/// [`add_record`]: AddressBook::add_record
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut john = Record::new("John").unwrap();
/// john.add_phone("1234567890").unwrap();
/// book.add_record(john);
///
/// assert_eq!(book.to_string(), "Contact name: John, phones: 1234567890");
/// assert!(book.find("Jane").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// A record already stored under the same name is replaced (no merge) and
    /// the entry keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            tracing::debug!(name = %name, "Record replaced");
        } else {
            tracing::debug!(name = %name, count = self.records.len(), "Record added");
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let found = self.records.get(name);
        tracing::trace!(name, found = found.is_some(), "Record lookup");
        found
    }

    /// Mutable lookup by name, for editing a record's phones.
    ///
    /// The returned handle cannot rename or replace the record.
    pub fn find_mut(&mut self, name: &str) -> Option<RecordMut<'_>> {
        self.records.get_mut(name).map(RecordMut::new)
    }

    /// Remove the record stored under `name`.
    ///
    /// Deleting a missing name is a no-op.
    pub fn delete(&mut self, name: &str) {
        if self.records.shift_remove(name).is_some() {
            tracing::debug!(name, "Record deleted");
        }
    }

    /// Whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// All records holding exactly `phone`, in insertion order.
    pub fn find_by_phone(&self, phone: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| record.has_phone(phone))
            .collect()
    }

    /// Fuzzy search over contact names.
    ///
    /// Results are sorted by confidence (highest first), then by name, and
    /// truncated to `max_results`.
    pub fn search(
        &self,
        query: &str,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'_>> {
        let results = NameMatcher::new().find_matches(
            query,
            self.records.values(),
            max_results,
            min_confidence,
        );
        tracing::debug!(query, matches = results.len(), "Name search complete");
        results
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

// One rendered record per line, insertion order
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

// Serde support - serialize as an array of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - rebuild through add_record so keys always match names
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
