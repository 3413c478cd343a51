//! # Field Parsing
//!
//! Every value that enters a [`Product`](crate::model::Product), whether typed at
//! the menu, rolled by the loot table or read back from the save file, passes
//! through this module. None of these functions can fail:
//!
//! - Numeric fields use a strict parse. Anything that is not a non-negative,
//!   finite number becomes the field's default (`0` or `0.0`).
//! - Text fields are trimmed, stripped of the save file delimiter and of line
//!   breaks, then copied up to their byte cap. The cap is checked before each
//!   character is pushed, so the result never outgrows it. Cuts always land on a
//!   UTF-8 character boundary.
//!
//! Ids are the exception: [`FieldKind::Id`] yields `None` for anything outside
//! `1..=MAX_ID`, since an id is never invented by coercion.

use crate::model::{FieldLimits, NewProduct, ProductInput, MAX_ID, UNNAMED};

/// Separator between fields in the save file.
pub const DELIMITER: char = '|';

/// Stands in for [`DELIMITER`] inside text fields.
pub const DELIMITER_REPLACEMENT: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Id,
    Name,
    Description,
    Category,
    Quantity,
    UnitPrice,
    Discount,
    Note,
}

impl FieldKind {
    /// Save file column order.
    pub const ORDER: [FieldKind; 8] = [
        FieldKind::Id,
        FieldKind::Name,
        FieldKind::Description,
        FieldKind::Category,
        FieldKind::Quantity,
        FieldKind::UnitPrice,
        FieldKind::Discount,
        FieldKind::Note,
    ];

    /// Byte cap for text kinds, `None` for numeric ones.
    pub fn limit(self, limits: &FieldLimits) -> Option<usize> {
        match self {
            FieldKind::Name => Some(limits.name),
            FieldKind::Description => Some(limits.description),
            FieldKind::Category => Some(limits.category),
            FieldKind::Note => Some(limits.note),
            FieldKind::Id | FieldKind::Quantity | FieldKind::UnitPrice | FieldKind::Discount => {
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Id(Option<u32>),
    Text(String),
    Count(u32),
    Amount(f64),
}

pub fn parse_field(raw: &str, kind: FieldKind, limits: &FieldLimits) -> FieldValue {
    match kind {
        FieldKind::Id => FieldValue::Id(parse_id(raw)),
        FieldKind::Name => FieldValue::Text(parse_name(raw, limits.name)),
        FieldKind::Description => FieldValue::Text(parse_text(raw, limits.description)),
        FieldKind::Category => FieldValue::Text(parse_text(raw, limits.category)),
        FieldKind::Note => FieldValue::Text(parse_text(raw, limits.note)),
        FieldKind::Quantity => FieldValue::Count(parse_quantity(raw)),
        FieldKind::UnitPrice | FieldKind::Discount => FieldValue::Amount(parse_amount(raw)),
    }
}

/// A positive id no greater than [`MAX_ID`].
pub fn parse_id(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|id| (1..=MAX_ID).contains(id))
}

pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(clamp_amount).unwrap_or(0.0)
}

/// Maps negative, NaN and infinite amounts to `0.0`.
pub fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub fn parse_text(raw: &str, max_bytes: usize) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len().min(max_bytes));
    for c in trimmed.chars() {
        let c = match c {
            DELIMITER => DELIMITER_REPLACEMENT,
            '\r' | '\n' => ' ',
            other => other,
        };
        if out.len() + c.len_utf8() > max_bytes {
            break;
        }
        out.push(c);
    }
    // A cut can leave a separator at the end.
    let kept = out.trim_end().len();
    out.truncate(kept);
    out
}

/// Like [`parse_text`], but a blank result becomes [`UNNAMED`].
pub fn parse_name(raw: &str, max_bytes: usize) -> String {
    let name = parse_text(raw, max_bytes);
    if name.is_empty() {
        parse_text(UNNAMED, max_bytes)
    } else {
        name
    }
}

pub fn parse_product(input: &ProductInput, limits: &FieldLimits) -> NewProduct {
    NewProduct {
        name: parse_name(&input.name, limits.name),
        description: parse_text(&input.description, limits.description),
        category: parse_text(&input.category, limits.category),
        quantity: parse_quantity(&input.quantity),
        unit_price: parse_amount(&input.unit_price),
        discount: parse_amount(&input.discount),
        note: parse_text(&input.note, limits.note),
    }
}

/// Re-validates a product built from typed values, e.g. by the loot table.
pub fn sanitize_product(new: NewProduct, limits: &FieldLimits) -> NewProduct {
    NewProduct {
        name: parse_name(&new.name, limits.name),
        description: parse_text(&new.description, limits.description),
        category: parse_text(&new.category, limits.category),
        quantity: new.quantity,
        unit_price: clamp_amount(new.unit_price),
        discount: clamp_amount(new.discount),
        note: parse_text(&new.note, limits.note),
    }
}
