//! # Address Book
//!
//! [`AddressBook`] is the keyed collection of [`Record`]s and the unit of
//! persistence: stores read and write it whole.
//!
//! Records are kept in insertion order, which is the order used by
//! [`AddressBook::show_all`], [`AddressBook::iterator`] and
//! [`AddressBook::to_find`]. Overwriting an existing name keeps its position.
//! The key of every entry is its record's name, so the two cannot disagree.

use crate::error::ValidationError;
use crate::model::Record;
use serde::{Deserialize, Serialize};

/// Persisted as a plain list of records. Loading rejects a list in which two
/// records share a name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl TryFrom<Vec<Record>> for AddressBook {
    type Error = ValidationError;

    fn try_from(records: Vec<Record>) -> Result<Self, Self::Error> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.name() == record.name()) {
                return Err(ValidationError::DuplicateName(record.name().to_string()));
            }
        }
        Ok(Self { records })
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Inserts `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name() == record.name()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn del_record(&mut self, name: &str) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.name().as_str() == name)?;
        Some(self.records.remove(pos))
    }

    /// Pages of up to `page_size` records each. See [`Pages`].
    pub fn iterator(&self, page_size: usize) -> Pages<'_> {
        Pages {
            records: &self.records,
            page_size: page_size.max(1),
            done: false,
        }
    }

    /// One line per (record, token) pair where the token occurs in the
    /// record's display form. A record matching several tokens is listed
    /// once per token.
    pub fn to_find<T: AsRef<str>>(&self, tokens: &[T]) -> Vec<String> {
        let mut found = Vec::new();
        for record in &self.records {
            let shown = record.to_string();
            for token in tokens {
                if shown.contains(token.as_ref()) {
                    found.push(format!("{} {}", record.name().title(), shown));
                }
            }
        }
        found
    }

    pub fn show_all(&self) -> String {
        self.records
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lazy pagination over an [`AddressBook`].
///
/// Yields every full page, then always yields the remainder as a last page,
/// even when it is empty: three records at two per page give two pages, four
/// records give three (the last one empty). Entries within a page are
/// newline-separated. Create a new iterator to start over.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: &'a [Record],
    page_size: usize,
    done: bool,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let take = if self.records.len() >= self.page_size {
            self.page_size
        } else {
            self.done = true;
            self.records.len()
        };
        let (page, rest) = self.records.split_at(take);
        self.records = rest;
        Some(
            page.iter()
                .map(Record::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Name, Phone};

    fn record(name: &str, phone: &str) -> Record {
        Record::new(Name::parse(name).unwrap(), Some(Phone::parse(phone).unwrap()))
    }

    fn book_of(count: usize) -> AddressBook {
        let names = ["Ann", "Bob", "Cid", "Dan", "Eve"];
        let mut book = AddressBook::new();
        for name in names.iter().take(count) {
            book.add_record(record(name, "1234567890"));
        }
        book
    }

    #[test]
    fn add_record_overwrites_in_place() {
        let mut book = book_of(2);
        book.add_record(record("Ann", "5555555555"));
        assert_eq!(book.len(), 2);
        let first = book.records().next().unwrap();
        assert_eq!(first.name().as_str(), "Ann");
        assert_eq!(first.phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn del_record_returns_removed() {
        let mut book = book_of(2);
        let removed = book.del_record("Ann").unwrap();
        assert_eq!(removed.name().as_str(), "Ann");
        assert!(book.del_record("Ann").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn pages_with_partial_tail() {
        let book = book_of(3);
        let pages: Vec<String> = book.iterator(2).collect();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], "Ann: [1234567890]\nBob: [1234567890]");
        assert_eq!(pages[1], "Cid: [1234567890]");
    }

    #[test]
    fn pages_yield_trailing_empty_page() {
        let book = book_of(4);
        let pages: Vec<String> = book.iterator(2).collect();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2], "");

        let empty: Vec<String> = AddressBook::new().iterator(2).collect();
        assert_eq!(empty, vec![String::new()]);
    }

    #[test]
    fn pages_restart_by_recreation() {
        let book = book_of(3);
        assert_eq!(book.iterator(2).count(), 2);
        assert_eq!(book.iterator(2).count(), 2);
    }

    #[test]
    fn to_find_single_match() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));
        book.add_record(record("Mary", "0987654321"));
        let found = book.to_find(&["John"]);
        assert_eq!(found, vec!["John John: [1234567890]".to_string()]);
    }

    #[test]
    fn to_find_duplicates_per_token() {
        let mut book = AddressBook::new();
        book.add_record(record("john", "1234567890"));
        let found = book.to_find(&["john", "123"]);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|line| line == "John john: [1234567890]"));
        assert!(book.to_find(&["zzz"]).is_empty());
    }

    #[test]
    fn deserialize_rejects_duplicate_names() {
        let json = r#"[{"name":"Ann","phones":[]},{"name":"Bob","phones":[]},{"name":"Ann","phones":[]}]"#;
        let err = serde_json::from_str::<AddressBook>(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate contact 'Ann'"));

        let book = book_of(3);
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(serde_json::from_str::<AddressBook>(&json).unwrap(), book);
    }

    #[test]
    fn show_all_lists_in_insertion_order() {
        let book = book_of(2);
        assert_eq!(book.show_all(), "Ann: [1234567890]\nBob: [1234567890]");
        assert_eq!(AddressBook::new().show_all(), "");
    }
}
