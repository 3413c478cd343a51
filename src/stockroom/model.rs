use serde::{Deserialize, Serialize};

/// Placeholder stored when a product name is blank after sanitization.
pub const UNNAMED: &str = "Unnamed";

/// Highest id a product can carry. `u32::MAX` is never assigned, so the id
/// counter can always sit one past the highest live id.
pub const MAX_ID: u32 = u32::MAX - 1;

/// A product owned by the inventory. Only the inventory hands out ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub discount: f64,
    pub note: String,
}

impl Product {
    pub fn from_new(id: u32, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            category: new.category,
            quantity: new.quantity,
            unit_price: new.unit_price,
            discount: new.discount,
            note: new.note,
        }
    }

    /// Stock value after discount, never below zero.
    pub fn stock_value(&self) -> f64 {
        let unit = (self.unit_price - self.discount).max(0.0);
        unit * f64::from(self.quantity)
    }
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub discount: f64,
    pub note: String,
}

/// Raw text for every field of a new product, as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity: String,
    pub unit_price: String,
    pub discount: String,
    pub note: String,
}

/// Partial modification. `None` or blank text keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
    pub discount: Option<String>,
    pub note: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.description,
            &self.category,
            &self.quantity,
            &self.unit_price,
            &self.discount,
            &self.note,
        ]
        .iter()
        .all(|field| field.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

/// Maximum byte length of each text field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldLimits {
    #[serde(default = "default_name_limit")]
    pub name: usize,
    #[serde(default = "default_description_limit")]
    pub description: usize,
    #[serde(default = "default_category_limit")]
    pub category: usize,
    #[serde(default = "default_note_limit")]
    pub note: usize,
}

fn default_name_limit() -> usize {
    64
}

fn default_description_limit() -> usize {
    1024
}

fn default_category_limit() -> usize {
    64
}

fn default_note_limit() -> usize {
    256
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            name: default_name_limit(),
            description: default_description_limit(),
            category: default_category_limit(),
            note: default_note_limit(),
        }
    }
}
