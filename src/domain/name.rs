//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The name a contact is filed under.
///
/// The name doubles as the record's key in an address book, so lookups match
/// it byte for byte. The only rule is that it is not the empty string:
/// whitespace-only names and surrounding spaces are stored untouched, and
/// `"John"` and `" John"` are two different contacts.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// assert!(Name::new("").is_err());
/// assert_eq!(Name::new(" John").unwrap().as_str(), " John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Build a name from `name` without trimming or normalizing it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for `""`.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// The name exactly as it was given, used as the book key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Serialized as the bare string, same as the book key
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserializing an empty string fails like `Name::new`
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
