//! Record model representing one contact in the address book.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name plus an ordered list of phone numbers.
///
/// Phones keep insertion order and duplicates are allowed. The name is fixed
/// at construction; there is no way to change it afterwards, which is what
/// lets [`AddressBook`](crate::AddressBook) key records by name safely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Stored phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`, returning how many were removed.
    ///
    /// Removing a number that is not stored is not an error.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p != phone);
        let removed = before - self.phones.len();
        if removed > 0 {
            tracing::debug!(contact = %self.name, phone, removed, "Phone removed");
        }
        removed
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`.
    ///
    /// The new number is validated before anything is searched or changed,
    /// and the edited entry keeps its position.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidPhone` if `new_phone` is malformed
    /// - `ValidationError::PhoneNotFound` if no stored phone equals `old_phone`
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let new_phone = Phone::new(new_phone)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| *p == old_phone)
            .ok_or_else(|| ValidationError::PhoneNotFound(old_phone.to_string()))?;

        tracing::debug!(
            contact = %self.name,
            old = old_phone,
            new = %new_phone,
            "Phone edited"
        );
        *slot = new_phone;
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Whether any stored phone equals `phone`.
    pub fn has_phone(&self, phone: &str) -> bool {
        self.find_phone(phone).is_some()
    }
}

// Renders as `Contact name: <name>, phones: <p1>; <p2>`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_rejects_blank_name() {
        assert_eq!(Record::new("  ").unwrap_err(), ValidationError::EmptyName);
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with("John", &["1234567890", "5555555555", "1234567890"]);
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1234567890", "5555555555", "1234567890"]);
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_unchanged() {
        let mut record = record_with("John", &["1234567890"]);
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = record_with("John", &["1234567890", "5555555555", "1234567890"]);
        assert_eq!(record.remove_phone("1234567890"), 2);
        assert_eq!(record.phones(), &[Phone::new("5555555555").unwrap()]);
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut record = record_with("John", &["1234567890"]);
        assert_eq!(record.remove_phone("0000000000"), 0);
        assert_eq!(record.remove_phone("not a phone"), 0);
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_in_place() {
        let mut record = record_with("John", &["1234567890", "5555555555"]);
        record.edit_phone("1234567890", "1112223333").unwrap();

        assert!(record.find_phone("1234567890").is_none());
        assert_eq!(record.phones()[0], "1112223333");
        assert_eq!(record.phones()[1], "5555555555");
    }

    #[test]
    fn test_edit_phone_only_first_duplicate() {
        let mut record = record_with("John", &["1234567890", "1234567890"]);
        record.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(record.phones()[0], "1112223333");
        assert_eq!(record.phones()[1], "1234567890");
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = record_with("John", &["1234567890"]);
        let err = record.edit_phone("0000000000", "1112223333").unwrap_err();
        assert_eq!(err.to_string(), "old phone not found");
        assert_eq!(record.phones()[0], "1234567890");
    }

    #[test]
    fn test_edit_phone_validates_new_first() {
        let mut record = record_with("John", &["1234567890"]);

        // Invalid new number wins over a missing old number
        let err = record.edit_phone("0000000000", "bad").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("bad".to_string()));

        let err = record.edit_phone("1234567890", "123").unwrap_err();
        assert_eq!(err.to_string(), "invalid phone");
        assert_eq!(record.phones()[0], "1234567890");
    }

    #[test]
    fn test_find_phone() {
        let record = record_with("John", &["1234567890", "5555555555"]);
        assert_eq!(record.find_phone("5555555555").unwrap(), "5555555555");
        assert!(record.find_phone("9999999999").is_none());
        assert!(record.has_phone("1234567890"));
    }

    #[test]
    fn test_display() {
        let record = record_with("John", &["1112223333", "5555555555"]);
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );
    }

    #[test]
    fn test_display_without_phones() {
        let record = Record::new("Jane").unwrap();
        assert_eq!(record.to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let record = record_with("Jane", &["9876543210"]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Jane", "phones": ["9876543210"] })
        );
    }

    #[test]
    fn test_record_deserialization_validates() {
        let record: Record = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        assert!(record.phones().is_empty());

        let bad: Result<Record, _> =
            serde_json::from_str(r#"{"name": "Jane", "phones": ["123"]}"#);
        assert!(bad.is_err());

        let blank: Result<Record, _> = serde_json::from_str(r#"{"name": ""}"#);
        assert!(blank.is_err());
    }
}
