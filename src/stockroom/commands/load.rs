use crate::codec::{self, DecodeOptions};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::journal::{Journal, JournalEntry};
use crate::store::DataStore;
use std::path::Path;

/// Replaces `inventory` with the contents of `path`.
///
/// The file is decoded into a fresh inventory first, so an I/O error leaves
/// the current one untouched. Corrupt lines become warnings.
pub fn run<S: DataStore>(
    inventory: &mut Inventory,
    store: &mut S,
    journal: &Journal,
    path: &Path,
    options: &DecodeOptions,
) -> Result<CmdResult> {
    let decoded = {
        let reader = store.open(path)?;
        codec::decode(reader, options)?
    };

    let mut result = CmdResult::default();
    for line in &decoded.truncated {
        result.add_message(CmdMessage::warning(format!(
            "Warning: line {} is longer than {} bytes and was truncated",
            line, options.max_line_len
        )));
    }
    for corrupt in &decoded.skipped {
        result.add_message(CmdMessage::warning(format!(
            "Warning: {}, skipped",
            corrupt
        )));
    }

    // Ids handed out earlier in this session stay retired.
    let floor = inventory.next_id();
    *inventory = decoded.inventory;
    inventory.ensure_next_id(floor);

    journal.record(
        store,
        &JournalEntry::Loaded {
            path: path.to_path_buf(),
            count: decoded.loaded,
            skipped: decoded.skipped.len(),
        },
    );

    result.add_message(CmdMessage::success(format!(
        "Load complete: {} products loaded from {}",
        decoded.loaded,
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{save, MessageLevel};
    use crate::error::StockError;
    use crate::inventory::fixtures::{inventory_with, product};
    use crate::model::NewProduct;
    use crate::store::memory::InMemoryStore;

    fn load(inventory: &mut Inventory, store: &mut InMemoryStore) -> Result<CmdResult> {
        run(
            inventory,
            store,
            &Journal::disabled(),
            Path::new("inventory.txt"),
            &DecodeOptions::default(),
        )
    }

    #[test]
    fn save_restart_load_finds_product() {
        let mut store = InMemoryStore::new();
        let mut inventory = Inventory::new();
        inventory.insert(NewProduct {
            name: "Duct tape".into(),
            quantity: 5,
            ..product("x", 0)
        }).unwrap();
        save::run(&inventory, &mut store, &Journal::disabled(), Path::new("inventory.txt"))
            .unwrap();

        let mut restarted = Inventory::new();
        let result = load(&mut restarted, &mut store).unwrap();

        assert_eq!(restarted.find(1).unwrap().name, "Duct tape");
        assert_eq!(restarted.find(1).unwrap().quantity, 5);
        assert!(result.messages[0].content.starts_with("Load complete: 1 products"));
    }

    #[test]
    fn load_replaces_current_inventory() {
        let mut store = InMemoryStore::new();
        store.insert_file("inventory.txt", "10|FromFile|||1|1|0|\n");
        let mut inventory = inventory_with(&["InMemory"]);

        load(&mut inventory, &mut store).unwrap();

        let names: Vec<_> = inventory.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["FromFile"]);
        assert_eq!(inventory.next_id(), 11);
    }

    #[test]
    fn corrupt_line_warns_and_valid_line_loads() {
        let mut store = InMemoryStore::new();
        store.insert_file(
            "inventory.txt",
            "1|ItemCorrompu|Desc|Cat|10|5.5|0|Note\n2|ItemCasseDesc|Cat|10|5.5|0|Note\n",
        );
        let mut inventory = Inventory::new();

        let result = load(&mut inventory, &mut store).unwrap();

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.find(1).unwrap().name, "ItemCorrompu");
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.starts_with("Warning: line 2 is corrupt"));
        assert!(result.has_level(MessageLevel::Success));
    }

    #[test]
    fn missing_file_keeps_inventory() {
        let mut store = InMemoryStore::new();
        let mut inventory = inventory_with(&["Keep"]);

        let err = load(&mut inventory, &mut store).unwrap_err();

        assert!(matches!(err, StockError::Io(_)));
        assert_eq!(inventory.find(1).unwrap().name, "Keep");
    }

    #[test]
    fn session_ids_stay_retired_after_load() {
        let mut store = InMemoryStore::new();
        store.insert_file("inventory.txt", "1|Old|||1|1|0|\n");
        let mut inventory = inventory_with(&["A", "B", "C"]);
        inventory.delete(3).unwrap();

        load(&mut inventory, &mut store).unwrap();

        assert_eq!(inventory.insert(product("New", 1)).unwrap(), 4);
    }

    #[test]
    fn journals_load_with_skip_count() {
        let mut store = InMemoryStore::new();
        store.insert_file("inventory.txt", "1|A|||1|1|0|\nbad\n");
        run(
            &mut Inventory::new(),
            &mut store,
            &Journal::new("history.log"),
            Path::new("inventory.txt"),
            &DecodeOptions::default(),
        )
        .unwrap();

        let log = store.contents(Path::new("history.log")).unwrap();
        assert!(log.contains("[l] Loaded 1 products from inventory.txt (1 lines skipped)"));
    }
}
