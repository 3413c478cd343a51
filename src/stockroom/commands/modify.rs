use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::journal::{Journal, JournalEntry};
use crate::model::{FieldLimits, ProductPatch};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    inventory: &mut Inventory,
    store: &mut S,
    journal: &Journal,
    id: u32,
    patch: &ProductPatch,
    limits: &FieldLimits,
) -> Result<CmdResult> {
    let product = inventory.update(id, patch, limits)?.clone();

    journal.record(
        store,
        &JournalEntry::Modified {
            id: product.id,
            name: product.name.clone(),
        },
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "[~] Modification successful (id {}): {}",
        product.id, product.name
    )));
    if patch.is_empty() {
        result.add_message(CmdMessage::info("No field changed."));
    }
    result.affected_products.push(product);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::StockError;
    use crate::inventory::fixtures::inventory_with;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn blank_patch_keeps_values_and_still_succeeds() {
        let mut inventory = inventory_with(&["A"]);
        let before = inventory.find(1).cloned().unwrap();
        let mut store = InMemoryStore::new();

        let result = run(
            &mut inventory,
            &mut store,
            &Journal::disabled(),
            1,
            &ProductPatch::default(),
            &FieldLimits::default(),
        )
        .unwrap();

        assert!(result.has_level(MessageLevel::Success));
        assert!(result.messages[0].content.starts_with("[~] Modification successful"));
        assert_eq!(result.affected_products[0], before);
    }

    #[test]
    fn replaces_given_fields() {
        let mut inventory = inventory_with(&["A"]);
        let mut store = InMemoryStore::new();
        let patch = ProductPatch {
            category: Some("Potion".into()),
            discount: Some("2.5".into()),
            ..Default::default()
        };

        run(
            &mut inventory,
            &mut store,
            &Journal::disabled(),
            1,
            &patch,
            &FieldLimits::default(),
        )
        .unwrap();

        let product = inventory.find(1).unwrap();
        assert_eq!(product.category, "Potion");
        assert_eq!(product.discount, 2.5);
        assert_eq!(product.name, "A");
    }

    #[test]
    fn unknown_id_is_not_found_regardless_of_payload() {
        let mut inventory = inventory_with(&["A"]);
        let mut store = InMemoryStore::new();
        let patch = ProductPatch {
            name: Some("X".into()),
            quantity: Some("3".into()),
            ..Default::default()
        };

        for payload in [ProductPatch::default(), patch] {
            let err = run(
                &mut inventory,
                &mut store,
                &Journal::disabled(),
                999,
                &payload,
                &FieldLimits::default(),
            )
            .unwrap_err();
            assert!(matches!(err, StockError::ProductNotFound(999)));
        }
    }
}
