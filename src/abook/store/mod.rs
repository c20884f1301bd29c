//! # Storage Layer
//!
//! The [`BookStore`] trait persists an [`AddressBook`] as one unit. There are
//! no partial updates: a read returns the whole book as it is on disk right
//! now, a write replaces it entirely.
//!
//! Commands never hold a book across invocations. Each one reads the store,
//! works on its own copy, and writes it back only if it changed something,
//! so the last writer wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one file at a fixed path, replaced atomically on write
//! - [`memory::InMemoryStore`]: serialized bytes kept in memory, for tests
//!
//! A missing book is not an error; both stores return an empty book.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Load the whole book, or an empty one if nothing was saved yet.
    fn read_file(&self) -> Result<AddressBook>;

    /// Replace the saved book with `book`.
    fn write_file(&mut self, book: &AddressBook) -> Result<()>;
}
