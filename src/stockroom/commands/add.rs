use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::inventory::Inventory;
use crate::journal::{Journal, JournalEntry};
use crate::model::NewProduct;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    inventory: &mut Inventory,
    store: &mut S,
    journal: &Journal,
    new: NewProduct,
) -> Result<CmdResult> {
    let id = inventory.insert(new)?;
    let product = inventory
        .find(id)
        .cloned()
        .ok_or(StockError::ProductNotFound(id))?;

    journal.record(store, &JournalEntry::added(&product));

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "[+] Product added (id {}): {}",
        product.id, product.name
    )));
    result.affected_products.push(product);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::fixtures::product;
    use crate::store::memory::InMemoryStore;
    use std::path::Path;

    #[test]
    fn adds_product_with_fresh_id() {
        let mut inventory = Inventory::new();
        let mut store = InMemoryStore::new();
        let journal = Journal::disabled();

        run(&mut inventory, &mut store, &journal, product("A", 1)).unwrap();
        let result = run(&mut inventory, &mut store, &journal, product("B", 2)).unwrap();

        assert_eq!(result.affected_products[0].id, 2);
        assert_eq!(inventory.len(), 2);
        assert!(result.messages[0].content.contains("Product added (id 2): B"));
    }

    #[test]
    fn exhausted_ids_fail_without_journaling() {
        let mut inventory = Inventory::new();
        inventory.ensure_next_id(u32::MAX);
        let mut store = InMemoryStore::new();
        let journal = Journal::new("history.log");

        let err = run(&mut inventory, &mut store, &journal, product("A", 1)).unwrap_err();

        assert!(matches!(err, StockError::IdsExhausted));
        assert!(inventory.is_empty());
        assert!(store.contents(Path::new("history.log")).is_none());
    }

    #[test]
    fn records_journal_entry() {
        let mut inventory = Inventory::new();
        let mut store = InMemoryStore::new();
        let journal = Journal::new("history.log");

        run(&mut inventory, &mut store, &journal, product("Gauze", 4)).unwrap();

        let log = store.contents(Path::new("history.log")).unwrap();
        assert!(log.contains("[+] Added product 1: Gauze (qty 4)"));
    }
}
