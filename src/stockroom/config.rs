use crate::codec::{self, DEFAULT_MAX_LINE_LEN};
use crate::error::{Result, StockError};
use crate::model::{FieldLimits, UNNAMED};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "inventory.txt";
const DEFAULT_JOURNAL_FILE: &str = "history.log";

/// Configuration for stockroom, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Save file name, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Journal file name, relative to the data directory
    #[serde(default = "default_journal_file")]
    pub journal_file: String,

    #[serde(default = "default_journal_enabled")]
    pub journal_enabled: bool,

    /// Byte caps for text fields
    #[serde(default)]
    pub limits: FieldLimits,

    /// Longest save file line read before the rest is discarded. Must cover
    /// the widest record `limits` allow.
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_journal_file() -> String {
    DEFAULT_JOURNAL_FILE.to_string()
}

fn default_journal_enabled() -> bool {
    true
}

fn default_max_line_len() -> usize {
    DEFAULT_MAX_LINE_LEN
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            journal_file: default_journal_file(),
            journal_enabled: default_journal_enabled(),
            limits: FieldLimits::default(),
            max_line_len: default_max_line_len(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(StockError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.limits.name < UNNAMED.len() {
            return Err(StockError::Config(format!(
                "limits.name must be at least {} bytes",
                UNNAMED.len()
            )));
        }
        // Anything shorter would cut records this config lets us save
        let needed = codec::max_record_len(&self.limits);
        if self.max_line_len < needed {
            return Err(StockError::Config(format!(
                "max_line_len must be at least {} bytes for these limits",
                needed
            )));
        }
        if self.data_file.trim().is_empty() {
            return Err(StockError::Config("data_file cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn journal_path(&self, data_dir: &Path) -> Option<PathBuf> {
        self.journal_enabled.then(|| data_dir.join(&self.journal_file))
    }
}
