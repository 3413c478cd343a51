//! # CLI Layer
//!
//! This module is **one possible UI client** for stockroom. It is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Resolves the data directory from flags, environment and platform defaults
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: builds the session from `Cli` and `StockConfig`, then hands
//!   stdin and stdout to the menu loop
//! - `menu`: the numeric menu, generic over input and output
//! - `render`: products and messages as text

pub mod menu;
pub mod render;

use crate::args::Cli;
use directories::ProjectDirs;
use menu::Console;
use std::io;
use std::path::PathBuf;
use stockroom::api::InventoryApi;
use stockroom::codec::DecodeOptions;
use stockroom::config::StockConfig;
use stockroom::error::{Result, StockError};
use stockroom::journal::Journal;
use stockroom::loot::LootTable;
use stockroom::store::fs::FileStore;
use tracing::debug;

pub fn run(cli: &Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli)?;
    let config = apply_overrides(StockConfig::load(&data_dir)?, cli);
    config.validate()?;
    debug!(data_dir = %data_dir.display(), ?config, "starting session");

    let journal = match config.journal_path(&data_dir) {
        Some(path) => Journal::new(path),
        None => Journal::disabled(),
    };
    let loot = match cli.seed {
        Some(seed) => LootTable::seeded(seed),
        None => LootTable::new(),
    };
    let options = DecodeOptions {
        limits: config.limits,
        max_line_len: config.max_line_len,
    };
    let mut api = InventoryApi::new(FileStore::new(), loot, journal, options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        render::stdout_supports_color(),
    );
    menu::run(&mut api, &mut console, config.data_path(&data_dir))?;
    Ok(())
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    let dirs = ProjectDirs::from("com", "stockroom", "stockroom").ok_or_else(|| {
        StockError::Config("could not determine a data directory, use --data-dir".to_string())
    })?;
    Ok(dirs.data_dir().to_path_buf())
}

fn apply_overrides(mut config: StockConfig, cli: &Cli) -> StockConfig {
    if let Some(file) = &cli.file {
        config.data_file = file.clone();
    }
    if cli.no_journal {
        config.journal_enabled = false;
    }
    config
}
