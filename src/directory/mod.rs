//! The address book: all records, keyed by contact name.

mod address_book;
mod record_mut;

pub use address_book::AddressBook;
pub use record_mut::RecordMut;
