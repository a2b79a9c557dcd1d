//! Address Book - an in-memory contact directory.
//!
//! Contacts are named records, each holding a validated list of phone numbers,
//! indexed by name in an [`AddressBook`].
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`)
//! - **models**: The `Record` type with its phone list operations
//! - **book**: The `AddressBook` collection and its thread-safe wrapper
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **demo**: The demonstration scenario run by the binary
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut record = Record::new("John").unwrap();
//! record.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! let john = book.find("John").unwrap();
//! assert_eq!(john.to_string(), "Contact name: John, phones: 1234567890");
//! ```

pub mod book;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, DuplicatePolicy, SharedAddressBook};
pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, RecordError};
pub use models::Record;
