//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! session: the in-memory [`Inventory`], the storage backend, the loot source
//! and the journal. Every UI goes through it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw menu text into `NewProduct`, id strings into `u32`)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no terminal I/O and no formatting beyond message text.
//!
//! ## Generic Over DataStore and LootSource
//!
//! - Production: `InventoryApi<FileStore, LootTable>`
//! - Testing: `InventoryApi<InMemoryStore, ScriptedLoot>`

use crate::codec::DecodeOptions;
use crate::commands;
use crate::error::{Result, StockError};
use crate::fields;
use crate::inventory::Inventory;
use crate::journal::Journal;
use crate::loot::LootSource;
use crate::model::{FieldLimits, ProductInput, ProductPatch};
use crate::store::DataStore;
use std::path::Path;
use tracing::debug;

pub const FAREWELL: &str = "Inventory released. Goodbye.";

pub struct InventoryApi<S: DataStore, L: LootSource> {
    inventory: Inventory,
    store: S,
    loot: L,
    journal: Journal,
    options: DecodeOptions,
}

impl<S: DataStore, L: LootSource> InventoryApi<S, L> {
    pub fn new(store: S, loot: L, journal: Journal, options: DecodeOptions) -> Self {
        Self {
            inventory: Inventory::new(),
            store,
            loot,
            journal,
            options,
        }
    }

    pub fn add_manual(&mut self, input: &ProductInput) -> Result<commands::CmdResult> {
        let product = fields::parse_product(input, &self.options.limits);
        commands::add::run(&mut self.inventory, &mut self.store, &self.journal, product)
    }

    pub fn add_random(&mut self) -> Result<commands::CmdResult> {
        let rolled = fields::sanitize_product(self.loot.roll(), &self.options.limits);
        debug!(name = %rolled.name, quantity = rolled.quantity, "rolled loot");
        commands::add::run(&mut self.inventory, &mut self.store, &self.journal, rolled)
    }

    pub fn delete(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.inventory, &mut self.store, &self.journal, id)
    }

    pub fn modify(&mut self, id: u32, patch: &ProductPatch) -> Result<commands::CmdResult> {
        commands::modify::run(
            &mut self.inventory,
            &mut self.store,
            &self.journal,
            id,
            patch,
            &self.options.limits,
        )
    }

    pub fn find(&self, id: u32) -> Result<commands::CmdResult> {
        commands::find::run(&self.inventory, id)
    }

    pub fn display(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.inventory)
    }

    pub fn save(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::save::run(&self.inventory, &mut self.store, &self.journal, path)
    }

    pub fn load(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::load::run(
            &mut self.inventory,
            &mut self.store,
            &self.journal,
            path,
            &self.options,
        )
    }

    /// Drops every product. The session stays usable afterwards.
    pub fn quit(&mut self) -> Result<commands::CmdResult> {
        debug!(released = self.inventory.len(), "releasing inventory");
        self.inventory.clear();
        Ok(CmdResult::default().with_message(CmdMessage::info(FAREWELL)))
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn limits(&self) -> &FieldLimits {
        &self.options.limits
    }
}

/// Parses a product id typed by a user. Ids are positive integers.
pub fn parse_id(raw: &str) -> Result<u32> {
    fields::parse_id(raw).ok_or_else(|| StockError::InvalidId(raw.trim().to_string()))
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
