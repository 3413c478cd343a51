//! Append-only history of inventory changes.
//!
//! Each entry is one line, `[Mon Jan  5 14:03:11 2026] [+] Added product 3: Gauze (qty 4)`.
//! Journal writes are best effort: a failure is logged and the operation that
//! triggered it still succeeds.

use crate::model::Product;
use crate::store::DataStore;
use chrono::{DateTime, Local};
use std::fmt;
use std::path::PathBuf;
use tracing::warn;

const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, PartialEq)]
pub enum JournalEntry {
    Added { id: u32, name: String, quantity: u32 },
    Deleted { id: u32, name: String },
    Modified { id: u32, name: String },
    Saved { path: PathBuf, count: usize },
    Loaded { path: PathBuf, count: usize, skipped: usize },
}

impl JournalEntry {
    pub fn added(product: &Product) -> Self {
        JournalEntry::Added {
            id: product.id,
            name: product.name.clone(),
            quantity: product.quantity,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            JournalEntry::Added { .. } => "[+]",
            JournalEntry::Deleted { .. } => "[-]",
            JournalEntry::Modified { .. } => "[~]",
            JournalEntry::Saved { .. } => "[s]",
            JournalEntry::Loaded { .. } => "[l]",
        }
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.marker())?;
        match self {
            JournalEntry::Added { id, name, quantity } => {
                write!(f, "Added product {}: {} (qty {})", id, name, quantity)
            }
            JournalEntry::Deleted { id, name } => write!(f, "Deleted product {}: {}", id, name),
            JournalEntry::Modified { id, name } => {
                write!(f, "Modified product {} (name: {})", id, name)
            }
            JournalEntry::Saved { path, count } => {
                write!(f, "Saved {} products to {}", count, path.display())
            }
            JournalEntry::Loaded {
                path,
                count,
                skipped,
            } => write!(
                f,
                "Loaded {} products from {} ({} lines skipped)",
                count,
                path.display(),
                skipped
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Journal {
    path: Option<PathBuf>,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn record<S: DataStore>(&self, store: &mut S, entry: &JournalEntry) {
        self.record_at(store, entry, Local::now());
    }

    pub fn record_at<S: DataStore>(
        &self,
        store: &mut S,
        entry: &JournalEntry,
        at: DateTime<Local>,
    ) {
        let Some(path) = &self.path else {
            return;
        };
        let line = format_line(entry, at);
        if let Err(e) = store.append(path, &line) {
            warn!(path = %path.display(), error = %e, "could not write journal entry");
        }
    }
}

pub fn format_line(entry: &JournalEntry, at: DateTime<Local>) -> String {
    format!("[{}] {}\n", at.format(TIMESTAMP_FORMAT), entry)
}
