use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::journal::{Journal, JournalEntry};
use crate::store::DataStore;
use std::path::Path;

pub fn run<S: DataStore>(
    inventory: &Inventory,
    store: &mut S,
    journal: &Journal,
    path: &Path,
) -> Result<CmdResult> {
    let contents = codec::encode(inventory);
    store.write(path, &contents)?;

    let count = inventory.len();
    journal.record(
        store,
        &JournalEntry::Saved {
            path: path.to_path_buf(),
            count,
        },
    );

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Save complete: {} products written to {}",
        count,
        path.display()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::inventory::fixtures::inventory_with;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn writes_full_inventory() {
        let inventory = inventory_with(&["A", "B"]);
        let mut store = InMemoryStore::new();
        let path = Path::new("inventory.txt");

        let result = run(&inventory, &mut store, &Journal::disabled(), path).unwrap();

        let saved = store.contents(path).unwrap();
        assert_eq!(saved.lines().count(), 2);
        assert!(saved.starts_with("1|A|"));
        assert!(result.messages[0].content.starts_with("Save complete: 2 products"));
    }

    #[test]
    fn overwrites_previous_save() {
        let mut store = InMemoryStore::new();
        store.insert_file("inventory.txt", "9|Stale|||1|1|0|\n9|Stale|||1|1|0|\n");

        let inventory = inventory_with(&["Fresh"]);
        run(&inventory, &mut store, &Journal::disabled(), Path::new("inventory.txt")).unwrap();

        let saved = store.contents(Path::new("inventory.txt")).unwrap();
        assert!(!saved.contains("Stale"));
        assert_eq!(saved.lines().count(), 1);
    }

    #[test]
    fn empty_inventory_saves_empty_file() {
        let mut store = InMemoryStore::new();
        run(
            &Inventory::new(),
            &mut store,
            &Journal::disabled(),
            Path::new("inventory.txt"),
        )
        .unwrap();
        assert_eq!(store.contents(Path::new("inventory.txt")), Some(""));
    }

    #[test]
    fn unwritable_destination_surfaces_io_error() {
        let mut store = InMemoryStore::new();
        store.set_read_only("inventory.txt");
        let err = run(
            &inventory_with(&["A"]),
            &mut store,
            &Journal::new("history.log"),
            Path::new("inventory.txt"),
        )
        .unwrap_err();

        assert!(matches!(err, StockError::Io(_)));
        assert!(!store.exists(Path::new("history.log")));
    }
}
