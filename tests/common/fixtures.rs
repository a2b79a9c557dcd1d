//! Test fixtures and sample data.
//!
//! This module provides the records used by the demonstration scenario and
//! helpers for building others.

use address_book::{AddressBook, Record};

/// Create a record with the given phones.
///
/// # Panics
/// Panics if the name or any phone is invalid.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("valid name");
    for phone in phones {
        record.add_phone(*phone).expect("valid phone");
    }
    record
}

/// John with phones 1234567890 and 5555555555.
pub fn john() -> Record {
    sample_record("John", &["1234567890", "5555555555"])
}

/// Jane with phone 9876543210.
#[allow(dead_code)]
pub fn jane() -> Record {
    sample_record("Jane", &["9876543210"])
}

/// A book holding John and Jane.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(john());
    book.add_record(jane());
    book
}
