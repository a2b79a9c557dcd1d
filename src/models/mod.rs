//! Data models for address book entries.
//!
//! A [`Record`] is one named contact with its phone numbers. Records are
//! built from the validated value objects in [`crate::domain`].

pub mod record;

pub use record::Record;
