use crate::commands::CmdResult;
use crate::error::{Result, StockError};
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory, id: u32) -> Result<CmdResult> {
    let product = inventory
        .find(id)
        .cloned()
        .ok_or(StockError::ProductNotFound(id))?;
    Ok(CmdResult::default().with_listed_products(vec![product]))
}
