//! The address book collection.
//!
//! [`AddressBook`] maps contact names to [`crate::models::Record`]s and exposes
//! only the lookup and mutation operations the rest of the crate needs.
//! [`SharedAddressBook`] wraps it for access from several threads.

mod address_book;
mod shared;

pub use address_book::{AddressBook, DuplicatePolicy};
pub use shared::SharedAddressBook;
