//! # Stockroom Architecture
//!
//! Stockroom is an inventory library with a small interactive client on top. The
//! menu loop in the binary is the only place that reads stdin or prints; everything
//! below it works on plain Rust values.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Numeric menu, prompts, rendering, exit codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session facade: add, delete, modify, display, save, load │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per file, thoroughly unit tested           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (inventory.rs, codec.rs, fields.rs, model.rs)         │
//! │  - Arena-backed linked list keyed by product id             │
//! │  - Line codec that skips corrupt lines instead of aborting  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore (production), InMemoryStore   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Save File Format
//!
//! One product per line, eight fields separated by `|`:
//!
//! ```text
//! id|name|description|category|quantity|unit_price|discount|note
//! ```
//!
//! Text fields are sanitized on the way in so they can never contain the
//! delimiter or a line break. On load, a line with the wrong number of fields
//! is reported as a warning and skipped; the rest of the file still loads.
//!
//! ## Coercion Instead of Rejection
//!
//! Bad user input never interrupts the session. A quantity of `-10` or
//! `badtext` becomes `0`, a price of `-5.5` becomes `0.0`, and over-long text
//! is cut at its configured cap. See [`fields`].
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade, entry point for all operations
//! - [`commands`]: Business logic for each menu operation
//! - [`inventory`]: The in-memory product list
//! - [`codec`]: Save file encoding and fault-tolerant decoding
//! - [`fields`]: Field parsing, sanitization and clamping
//! - [`model`]: Core data types (`Product`, `NewProduct`, `ProductPatch`)
//! - [`store`]: Storage abstraction and implementations
//! - [`journal`]: Append-only history of mutations
//! - [`loot`]: Random product generator
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod inventory;
pub mod journal;
pub mod loot;
pub mod model;
pub mod store;
