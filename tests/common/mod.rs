//! Shared fixtures for integration tests.

use address_book::Record;

/// Build a record with the given phones, panicking on invalid input.
#[allow(dead_code)]
pub fn record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("fixture name should be valid");
    for phone in phones {
        record
            .add_phone(*phone)
            .expect("fixture phone should be valid");
    }
    record
}

/// Strings that are not valid phone numbers.
#[allow(dead_code)]
pub const INVALID_PHONES: &[&str] = &[
    "",
    "123",
    "123456789",
    "12345678901",
    "123-456-7890",
    "(123)4567890",
    "+1234567890",
    "12345 6789",
    "abcdefghij",
    "123456789O",
    " 1234567890",
    "1234567890 ",
    "١٢٣٤٥٦٧٨٩",
    "123456789²",
];

/// Strings that are valid phone numbers.
#[allow(dead_code)]
pub const VALID_PHONES: &[&str] = &[
    "0000000000",
    "1234567890",
    "5555555555",
    "9876543210",
    "١٢٣٤٥٦٧٨٩٠",
    "１２３４５６７８９０",
];
