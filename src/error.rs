//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`]; the
//! enums here wrap them with the context of the operation that failed.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating the phone list of a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A name or phone value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to remove or edit is not in the record
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),

    /// The replacement value passed to an edit failed validation
    #[error("Cannot replace with invalid phone: {0}")]
    InvalidReplacement(#[source] ValidationError),
}

impl RecordError {
    /// True for errors caused by a value that failed validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidReplacement(_))
    }

    /// True for errors caused by a phone number that is not in the record.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::PhoneNotFound(_))
    }
}

/// Errors that can occur when working with an address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A record with the same name is already stored
    #[error("Contact {0} already exists.")]
    DuplicateName(String),

    /// A thread panicked while holding the book's lock
    #[error("Address book lock poisoned")]
    LockPoisoned,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
