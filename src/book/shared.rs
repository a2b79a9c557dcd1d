use super::AddressBook;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A thread-safe handle to an [`AddressBook`].
///
/// The book is guarded by a single `RwLock`. Clones share the same book, so
/// a handle can be passed to each thread that needs it.
#[derive(Debug, Clone, Default)]
pub struct SharedAddressBook {
    inner: Arc<RwLock<AddressBook>>,
}

impl SharedAddressBook {
    /// Create a handle to an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing book.
    pub fn from_book(book: AddressBook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(book)),
        }
    }

    /// See [`AddressBook::add_record`].
    pub fn add_record(&self, record: Record) -> BookResult<Option<Record>> {
        Ok(self.write()?.add_record(record))
    }

    /// See [`AddressBook::insert_new`].
    pub fn insert_new(&self, record: Record) -> BookResult<()> {
        self.write()?.insert_new(record)
    }

    /// Look up a record by name and return a copy of it.
    pub fn find(&self, name: &str) -> BookResult<Option<Record>> {
        Ok(self.read()?.find(name).cloned())
    }

    /// See [`AddressBook::delete`].
    pub fn delete(&self, name: &str) -> BookResult<Option<Record>> {
        Ok(self.write()?.delete(name))
    }

    /// Run `f` on the record stored under `name` while holding the write lock.
    ///
    /// Returns `Ok(None)` if no record has that name.
    pub fn update<F, T>(&self, name: &str, f: F) -> BookResult<Option<T>>
    where
        F: FnOnce(&mut Record) -> T,
    {
        Ok(self.write()?.find_mut(name).map(f))
    }

    /// Number of stored records.
    pub fn len(&self) -> BookResult<usize> {
        Ok(self.read()?.len())
    }

    /// True if the book holds no records.
    pub fn is_empty(&self) -> BookResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Render the whole book as text.
    pub fn render(&self) -> BookResult<String> {
        Ok(self.read()?.to_string())
    }

    /// Copy the current contents out of the lock.
    pub fn snapshot(&self) -> BookResult<AddressBook> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> BookResult<RwLockReadGuard<'_, AddressBook>> {
        self.inner.read().map_err(|_| BookError::LockPoisoned)
    }

    fn write(&self) -> BookResult<RwLockWriteGuard<'_, AddressBook>> {
        self.inner.write().map_err(|_| BookError::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_crud() {
        let book = SharedAddressBook::new();
        book.add_record(Record::new("John").unwrap()).unwrap();

        let edited = book
            .update("John", |record| record.add_phone("1234567890"))
            .unwrap();
        assert!(matches!(edited, Some(Ok(()))));

        let john = book.find("John").unwrap().unwrap();
        assert_eq!(john.to_string(), "Contact name: John, phones: 1234567890");

        assert!(book.update("Nobody", |_| ()).unwrap().is_none());
        assert!(book.delete("John").unwrap().is_some());
        assert!(book.is_empty().unwrap());
    }

    #[test]
    fn test_shared_clones_see_same_book() {
        let book = SharedAddressBook::new();
        let other = book.clone();
        other.insert_new(Record::new("Jane").unwrap()).unwrap();

        assert_eq!(book.len().unwrap(), 1);
        assert_eq!(
            book.insert_new(Record::new("Jane").unwrap()),
            Err(BookError::DuplicateName("Jane".to_string()))
        );
    }

    #[test]
    fn test_concurrent_phone_adds() {
        let book = SharedAddressBook::new();
        book.add_record(Record::new("John").unwrap()).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let book = book.clone();
                thread::spawn(move || {
                    let phone = format!("{:010}", i);
                    book.update("John", |record| record.add_phone(phone))
                        .unwrap()
                        .unwrap()
                        .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let john = book.find("John").unwrap().unwrap();
        assert_eq!(john.phones().len(), 8);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let book = SharedAddressBook::new();
        let poisoner = book.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(book.len(), Err(BookError::LockPoisoned));
    }
}
