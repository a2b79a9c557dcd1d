//! Record model representing one named contact and its phone numbers.

use crate::domain::{Name, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact in the address book.
///
/// A record owns exactly one [`Name`] and an ordered list of [`Phone`]
/// numbers. Duplicate phone numbers are allowed and insertion order is kept.
/// Every phone in the list passed validation before it was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
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

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it to the end of the list.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> RecordResult<()> {
        let phone = Phone::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone whose value equals `phone` exactly.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone` and return it.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<Phone> {
        let index = self
            .position(phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))?;

        debug!(contact = %self.name, phone, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new`.
    ///
    /// The old number is removed and the new one is appended, so the edited
    /// number moves to the end of the list. The record is left untouched if
    /// either step would fail.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old` is not in the record.
    /// - `RecordError::InvalidReplacement` if `new` fails validation.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        let replacement = Phone::new(new).map_err(RecordError::InvalidReplacement)?;

        debug!(contact = %self.name, old, new = %replacement, "Editing phone");
        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(())
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

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
