//! Mutable access to a record stored in the address book.

use crate::domain::ValidationError;
use crate::models::Record;
use std::fmt;
use std::ops::Deref;

/// A record borrowed mutably from an [`AddressBook`](super::AddressBook).
///
/// Only phone operations are exposed. The record itself cannot be replaced
/// through this handle, so the book's key always matches the record's name.
/// Read access goes through `Deref<Target = Record>`.
///
/// ```compile_fail
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John").unwrap());
/// *book.find_mut("John").unwrap() = Record::new("Mallory").unwrap();
/// ```
#[derive(Debug)]
pub struct RecordMut<'a> {
    record: &'a mut Record,
}

impl<'a> RecordMut<'a> {
    pub(super) fn new(record: &'a mut Record) -> Self {
        Self { record }
    }

    /// See [`Record::add_phone`].
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.record.add_phone(phone)
    }

    /// See [`Record::remove_phone`].
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        self.record.remove_phone(phone)
    }

    /// See [`Record::edit_phone`].
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.record.edit_phone(old_phone, new_phone)
    }
}

impl Deref for RecordMut<'_> {
    type Target = Record;

    fn deref(&self) -> &Record {
        &*self.record
    }
}

impl fmt::Display for RecordMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.record, f)
    }
}
