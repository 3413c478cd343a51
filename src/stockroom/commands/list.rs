use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;

pub const EMPTY_INVENTORY: &str = "Inventory is empty.";

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    if inventory.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_INVENTORY)));
    }
    Ok(CmdResult::default().with_listed_products(inventory.list()))
}
