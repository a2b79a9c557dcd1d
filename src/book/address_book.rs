use crate::error::{BookError, BookResult};
use crate::models::Record;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// What to do when a record is added under a name that is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Replace the stored record.
    #[default]
    Overwrite,
    /// Keep the stored record and report [`BookError::DuplicateName`].
    Reject,
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "Must be 'overwrite' or 'reject', got: {}",
                other
            )),
        }
    }
}

/// A collection of records keyed by contact name.
///
/// Names are unique keys. Iteration and rendering follow name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already stored
    /// under that name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.records.insert(key, record);
        if let Some(previous) = &replaced {
            warn!(contact = %previous.name(), "Overwriting existing contact");
        } else {
            debug!(count = self.records.len(), "Contact added");
        }
        replaced
    }

    /// Insert `record` only if no record is stored under its name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateName` and leaves the book unchanged if
    /// the name is taken.
    pub fn insert_new(&mut self, record: Record) -> BookResult<()> {
        if self.records.contains_key(record.name().as_str()) {
            return Err(BookError::DuplicateName(record.name().to_string()));
        }
        self.add_record(record);
        Ok(())
    }

    /// Insert `record` following `policy`.
    pub fn add_with_policy(&mut self, record: Record, policy: DuplicatePolicy) -> BookResult<()> {
        match policy {
            DuplicatePolicy::Overwrite => {
                self.add_record(record);
                Ok(())
            }
            DuplicatePolicy::Reject => self.insert_new(record),
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for editing its phones.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// Deleting a missing name is not an error; `None` is returned.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            debug!(contact = name, "Contact deleted");
        }
        removed
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the stored records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.values().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
