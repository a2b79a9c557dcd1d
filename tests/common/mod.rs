//! Shared helpers for the integration tests.

pub mod fixtures;

use address_book::{Phone, Record};

/// Collect a record's phone numbers as string slices, in order.
#[allow(dead_code)]
pub fn phone_values(record: &Record) -> Vec<&str> {
    record.phones().iter().map(Phone::as_str).collect()
}
