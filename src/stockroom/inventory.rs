//! # Inventory
//!
//! The in-memory product list. Products are kept in insertion order as a singly
//! linked list whose nodes live in an arena (`Vec<Option<Node>>`). Links are
//! slot indices rather than pointers, so unlinking a node is plain index
//! bookkeeping and a removed node is dropped exactly once, when its slot is
//! emptied. Freed slots are recycled by later inserts.
//!
//! Ids come from a monotonic counter and are never handed out twice in the
//! lifetime of an `Inventory`, not even after a delete or a [`Inventory::clear`].
//! Products restored from a save file keep their ids; the counter then resumes
//! above the highest one seen. Ids stay within `1..=MAX_ID`; once the counter
//! passes [`MAX_ID`] inserts fail with [`StockError::IdsExhausted`].

use crate::error::{Result, StockError};
use crate::fields;
use crate::model::{FieldLimits, NewProduct, Product, ProductPatch, MAX_ID};
use tracing::debug;

#[derive(Debug)]
struct Node {
    product: Product,
    next: Option<usize>,
}

#[derive(Debug)]
pub struct Inventory {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    next_id: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The id the next [`Inventory::insert`] will assign.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Makes sure no id below `floor` is handed out again.
    pub fn ensure_next_id(&mut self, floor: u32) {
        self.next_id = self.next_id.max(floor);
    }

    /// Appends a product under a fresh id and returns that id.
    pub fn insert(&mut self, new: NewProduct) -> Result<u32> {
        let id = self.next_id;
        if id > MAX_ID {
            return Err(StockError::IdsExhausted);
        }
        self.next_id = id + 1;
        self.push_back(Product::from_new(id, new));
        debug!(id, "product inserted");
        Ok(id)
    }

    /// Appends a product that already carries an id, as read from a save file.
    pub fn insert_with_id(&mut self, product: Product) -> Result<()> {
        if product.id == 0 || product.id > MAX_ID {
            return Err(StockError::InvalidId(product.id.to_string()));
        }
        if self.find(product.id).is_some() {
            return Err(StockError::DuplicateId(product.id));
        }
        if product.id >= self.next_id {
            self.next_id = product.id + 1;
        }
        self.push_back(product);
        Ok(())
    }

    pub fn find(&self, id: u32) -> Option<&Product> {
        self.iter().find(|product| product.id == id)
    }

    fn find_slot(&self, id: u32) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index);
            if node.product.id == id {
                return Some(index);
            }
            cursor = node.next;
        }
        None
    }

    /// Replaces every non-blank field of `patch`, re-validated, and keeps the rest.
    pub fn update(
        &mut self,
        id: u32,
        patch: &ProductPatch,
        limits: &FieldLimits,
    ) -> Result<&Product> {
        let index = self.find_slot(id).ok_or(StockError::ProductNotFound(id))?;
        let product = &mut self.node_mut(index).product;

        if let Some(raw) = present(&patch.name) {
            product.name = fields::parse_name(raw, limits.name);
        }
        if let Some(raw) = present(&patch.description) {
            product.description = fields::parse_text(raw, limits.description);
        }
        if let Some(raw) = present(&patch.category) {
            product.category = fields::parse_text(raw, limits.category);
        }
        if let Some(raw) = present(&patch.quantity) {
            product.quantity = fields::parse_quantity(raw);
        }
        if let Some(raw) = present(&patch.unit_price) {
            product.unit_price = fields::parse_amount(raw);
        }
        if let Some(raw) = present(&patch.discount) {
            product.discount = fields::parse_amount(raw);
        }
        if let Some(raw) = present(&patch.note) {
            product.note = fields::parse_text(raw, limits.note);
        }

        debug!(id, "product updated");
        Ok(&self.node(index).product)
    }

    /// Unlinks the product with `id` and hands it back.
    pub fn delete(&mut self, id: u32) -> Result<Product> {
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let node = self.node(index);
            if node.product.id == id {
                break;
            }
            prev = Some(index);
            cursor = node.next;
        }

        let index = cursor.ok_or(StockError::ProductNotFound(id))?;
        let removed = self.slots[index]
            .take()
            .ok_or(StockError::ProductNotFound(id))?;

        match prev {
            // Removing the head, possibly the only node
            None => self.head = removed.next,
            Some(p) => self.node_mut(p).next = removed.next,
        }
        if self.tail == Some(index) {
            self.tail = prev;
        }

        self.free.push(index);
        self.len -= 1;
        debug!(id, remaining = self.len, "product deleted");
        Ok(removed.product)
    }

    /// Drops every product. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Products in insertion order. Call again to restart.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inventory: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    pub fn list(&self) -> Vec<Product> {
        self.iter().cloned().collect()
    }

    fn push_back(&mut self, product: Product) {
        let node = Node {
            product,
            next: None,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    // Linked slots are always occupied; an empty one means the chain is broken.
    fn node(&self, index: usize) -> &Node {
        match &self.slots[index] {
            Some(node) => node,
            None => unreachable!("inventory chain points at free slot {index}"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node {
        match &mut self.slots[index] {
            Some(node) => node,
            None => unreachable!("inventory chain points at free slot {index}"),
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|raw| !raw.trim().is_empty())
}

pub struct Iter<'a> {
    inventory: &'a Inventory,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Product;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let node = self.inventory.node(index);
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.product)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Product;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn product(name: &str, quantity: u32) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{} description", name),
            category: "Misc".to_string(),
            quantity,
            unit_price: 1.5,
            discount: 0.0,
            note: String::new(),
        }
    }

    pub fn inventory_with(names: &[&str]) -> Inventory {
        let mut inventory = Inventory::new();
        for (i, name) in names.iter().enumerate() {
            inventory
                .insert(product(name, i as u32 + 1))
                .expect("a fresh inventory has ids to spare");
        }
        inventory
    }
}
