use super::BookStore;
use crate::book::AddressBook;
use crate::error::{AbookError, Result};

/// In-memory storage for testing.
///
/// Keeps the serialized book rather than the book itself, so every read hands
/// out a fresh copy exactly like the file store does.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<Vec<u8>>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BookStore for InMemoryStore {
    fn read_file(&self) -> Result<AddressBook> {
        match &self.saved {
            Some(bytes) => serde_json::from_slice(bytes).map_err(AbookError::Serialization),
            None => Ok(AddressBook::new()),
        }
    }

    fn write_file(&mut self, book: &AddressBook) -> Result<()> {
        self.saved = Some(serde_json::to_vec(book).map_err(AbookError::Serialization)?);
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Birthday, Name, Phone, Record};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(self, name: &str, phones: &[&str]) -> Self {
            self.with_record(name, phones, "")
        }

        pub fn with_birthday_contact(self, name: &str, phone: &str, birthday: &str) -> Self {
            self.with_record(name, &[phone], birthday)
        }

        fn with_record(mut self, name: &str, phones: &[&str], birthday: &str) -> Self {
            let mut book = self.store.read_file().unwrap();
            let mut record = Record::new(Name::parse(name).unwrap(), None);
            for phone in phones {
                record.add_phone(Phone::parse(phone).unwrap());
            }
            record.add_birthday(Birthday::parse(birthday).unwrap());
            book.add_record(record);
            self.store.write_file(&book).unwrap();
            self
        }
    }
}
