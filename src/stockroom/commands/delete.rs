use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::journal::{Journal, JournalEntry};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    inventory: &mut Inventory,
    store: &mut S,
    journal: &Journal,
    id: u32,
) -> Result<CmdResult> {
    let removed = inventory.delete(id)?;

    journal.record(
        store,
        &JournalEntry::Deleted {
            id: removed.id,
            name: removed.name.clone(),
        },
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "[-] Product deleted (id {}): {}",
        removed.id, removed.name
    )));
    result.affected_products.push(removed);
    Ok(result)
}
