use super::DataStore;
use crate::error::{Result, StockError};
use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead, Cursor};
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
    read_only: HashSet<PathBuf>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Seeds a file without going through `write`.
    pub fn insert_file(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Makes every later `write` or `append` to `path` fail.
    pub fn set_read_only(&mut self, path: impl Into<PathBuf>) {
        self.read_only.insert(path.into());
    }

    fn check_writable(&self, path: &Path) -> Result<()> {
        if self.read_only.contains(path) {
            return Err(StockError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            )));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.check_writable(path)?;
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn append(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.check_writable(path)?;
        self.files
            .entry(path.to_path_buf())
            .or_default()
            .push_str(contents);
        Ok(())
    }

    fn open(&self, path: &Path) -> Result<Box<dyn BufRead + '_>> {
        let contents = self.files.get(path).ok_or_else(|| {
            StockError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })?;
        Ok(Box::new(Cursor::new(contents.as_bytes())))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}
