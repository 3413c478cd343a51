use super::DataStore;
use crate::error::{Result, StockError};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockError::Io)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self, path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("inventory");
        path.with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.ensure_parent(path)?;

        // Atomic write
        let tmp_path = self.temp_path(path);
        fs::write(&tmp_path, contents).map_err(StockError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StockError::Io(e));
        }

        Ok(())
    }

    fn append(&mut self, path: &Path, contents: &str) -> Result<()> {
        self.ensure_parent(path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(StockError::Io)?;
        file.write_all(contents.as_bytes()).map_err(StockError::Io)?;
        Ok(())
    }

    fn open(&self, path: &Path) -> Result<Box<dyn BufRead + '_>> {
        let file = File::open(path).map_err(StockError::Io)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
