//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the two validated fields of a
//! contact: its name and its phone numbers. These value objects validate at
//! construction time so an invalid name or phone can never be stored in a
//! record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
