//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of the crate touches
//! persistent bytes. The codec produces and consumes text; a store decides
//! where that text lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage on the local filesystem
//!   - Full rewrites go to a hidden temp file next to the target, which is
//!     then renamed over it. A crash mid-save leaves the old file intact.
//!   - Appends (the journal) open the file in append mode.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Individual paths can be marked read-only to exercise I/O failures
//!
//! ## Data Directory Layout
//!
//! ```text
//! <data-dir>/
//! ├── inventory.txt       # Save file, one product per line
//! ├── history.log         # Journal of mutations
//! └── config.json         # Optional configuration
//! ```

use crate::error::Result;
use std::io::BufRead;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for save file storage.
pub trait DataStore {
    /// Replace whatever is at `path` with `contents`, all or nothing.
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;

    /// Append `contents` to `path`, creating it if needed.
    fn append(&mut self, path: &Path, contents: &str) -> Result<()>;

    /// Open `path` for line-oriented reading.
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead + '_>>;

    fn exists(&self, path: &Path) -> bool;
}
