use super::BookStore;
use crate::book::AddressBook;
use crate::error::{AbookError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "contacts.json";

/// File-backed store holding the entire book in a single file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/<file_name>`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AbookError::Io)?;
            }
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn read_file(&self) -> Result<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=store_read status=missing path={}",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(err) => return Err(AbookError::Io(err)),
        };
        let book: AddressBook =
            serde_json::from_slice(&bytes).map_err(AbookError::Serialization)?;
        debug!(
            "event=store_read status=ok path={} records={}",
            self.path.display(),
            book.len()
        );
        Ok(book)
    }

    fn write_file(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let bytes = serde_json::to_vec(book).map_err(AbookError::Serialization)?;

        let tmp_name = format!(".contacts-{}.tmp", Uuid::new_v4());
        let tmp_path = match self.path.parent() {
            Some(parent) => parent.join(tmp_name),
            None => PathBuf::from(tmp_name),
        };
        if let Err(err) = fs::write(&tmp_path, bytes).and_then(|_| fs::rename(&tmp_path, &self.path))
        {
            let _ = fs::remove_file(&tmp_path);
            return Err(AbookError::Io(err));
        }

        debug!(
            "event=store_write status=ok path={} records={}",
            self.path.display(),
            book.len()
        );
        Ok(())
    }
}
