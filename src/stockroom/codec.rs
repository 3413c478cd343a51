//! # Save File Codec
//!
//! Turns an [`Inventory`] into the line format and back:
//!
//! ```text
//! id|name|description|category|quantity|unit_price|discount|note
//! ```
//!
//! Decoding is deliberately forgiving. A line is read at most `max_line_len`
//! bytes at a time and whatever lies beyond is discarded without being
//! buffered. Lines with the wrong field count, or with an id that is not a
//! positive integer or that was already seen, are skipped and reported in
//! [`Decoded::skipped`]; every other field goes through [`crate::fields`] and
//! cannot fail. Only I/O errors abort a decode.
//!
//! A line written by [`encode`] is never longer than [`max_record_len`] for
//! the limits its fields were parsed under, so a `max_line_len` at least that
//! long reads back everything this crate saved.

use crate::error::Result;
use crate::fields::{self, FieldKind, FieldValue, DELIMITER, DELIMITER_REPLACEMENT};
use crate::inventory::Inventory;
use crate::model::{FieldLimits, Product};
use std::borrow::Cow;
use std::fmt;
use std::io::{self, BufRead};
use tracing::warn;

pub const FIELD_COUNT: usize = FieldKind::ORDER.len();
pub const DEFAULT_MAX_LINE_LEN: usize = 4096;

/// Decimal digits of `u32::MAX`.
const MAX_INTEGER_LEN: usize = 10;

/// Longest `{}` rendering of a finite, non-negative `f64`. Display never uses
/// an exponent: `f64::MAX` takes 309 bytes, the smallest subnormals take "0."
/// plus 324 fraction digits.
pub const MAX_AMOUNT_LEN: usize = 326;

/// Worst-case length of an encoded line under `limits`, newline excluded.
pub fn max_record_len(limits: &FieldLimits) -> usize {
    let text: usize = FieldKind::ORDER
        .iter()
        .filter_map(|kind| kind.limit(limits))
        .sum();
    let numbers = FieldKind::ORDER
        .iter()
        .map(|kind| match kind {
            FieldKind::Id | FieldKind::Quantity => MAX_INTEGER_LEN,
            FieldKind::UnitPrice | FieldKind::Discount => MAX_AMOUNT_LEN,
            _ => 0,
        })
        .sum::<usize>();
    text + numbers + (FIELD_COUNT - 1)
}

#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    pub limits: FieldLimits,
    pub max_line_len: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            limits: FieldLimits::default(),
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorruptReason {
    FieldCount { found: usize },
    InvalidId(String),
    DuplicateId(u32),
}

/// A skipped line, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptLine {
    pub line: usize,
    pub reason: CorruptReason,
}

impl fmt::Display for CorruptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            CorruptReason::FieldCount { found } => write!(
                f,
                "line {} is corrupt ({} fields, expected {})",
                self.line, found, FIELD_COUNT
            ),
            CorruptReason::InvalidId(raw) => {
                write!(f, "line {} is corrupt (invalid id '{}')", self.line, raw)
            }
            CorruptReason::DuplicateId(id) => {
                write!(f, "line {} is corrupt (duplicate id {})", self.line, id)
            }
        }
    }
}

#[derive(Debug)]
pub struct Decoded {
    pub inventory: Inventory,
    pub loaded: usize,
    pub skipped: Vec<CorruptLine>,
    /// Lines that were longer than `max_line_len` and got cut.
    pub truncated: Vec<usize>,
}

pub fn encode(inventory: &Inventory) -> String {
    let mut out = String::new();
    for product in inventory {
        out.push_str(&encode_line(product));
    }
    out
}

pub fn encode_line(product: &Product) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}\n",
        product.id,
        clean(&product.name),
        clean(&product.description),
        clean(&product.category),
        product.quantity,
        product.unit_price,
        product.discount,
        clean(&product.note),
    )
}

// Fields are sanitized when parsed, but `Product` is a plain struct.
fn clean(text: &str) -> Cow<'_, str> {
    if text.contains([DELIMITER, '\r', '\n']) {
        Cow::Owned(
            text.chars()
                .map(|c| match c {
                    DELIMITER => DELIMITER_REPLACEMENT,
                    '\r' | '\n' => ' ',
                    other => other,
                })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

pub fn decode<R: BufRead>(mut reader: R, options: &DecodeOptions) -> Result<Decoded> {
    let mut inventory = Inventory::new();
    let mut skipped = Vec::new();
    let mut truncated = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    while let Some(was_truncated) = read_bounded_line(&mut reader, options.max_line_len, &mut buf)?
    {
        line_no += 1;
        if was_truncated {
            warn!(line = line_no, max = options.max_line_len, "line too long, truncated");
            truncated.push(line_no);
        }

        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        match decode_line(&line, &options.limits) {
            Ok(product) => {
                let id = product.id;
                if inventory.insert_with_id(product).is_err() {
                    skip(&mut skipped, line_no, CorruptReason::DuplicateId(id));
                }
            }
            Err(reason) => skip(&mut skipped, line_no, reason),
        }
    }

    Ok(Decoded {
        loaded: inventory.len(),
        inventory,
        skipped,
        truncated,
    })
}

fn skip(skipped: &mut Vec<CorruptLine>, line: usize, reason: CorruptReason) {
    let corrupt = CorruptLine { line, reason };
    warn!("skipping {}", corrupt);
    skipped.push(corrupt);
}

pub fn decode_line(
    line: &str,
    limits: &FieldLimits,
) -> std::result::Result<Product, CorruptReason> {
    let parts: Vec<&str> = line.split(DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return Err(CorruptReason::FieldCount { found: parts.len() });
    }

    let mut product = Product::default();
    for (raw, kind) in parts.iter().zip(FieldKind::ORDER) {
        match fields::parse_field(raw, kind, limits) {
            FieldValue::Id(id) => {
                product.id = id.ok_or_else(|| CorruptReason::InvalidId(raw.trim().to_string()))?;
            }
            FieldValue::Count(count) => product.quantity = count,
            FieldValue::Amount(amount) if kind == FieldKind::UnitPrice => {
                product.unit_price = amount
            }
            FieldValue::Amount(amount) => product.discount = amount,
            FieldValue::Text(text) => *text_field(&mut product, kind) = text,
        }
    }
    Ok(product)
}

// Only text kinds parse to `FieldValue::Text`.
fn text_field(product: &mut Product, kind: FieldKind) -> &mut String {
    match kind {
        FieldKind::Name => &mut product.name,
        FieldKind::Description => &mut product.description,
        FieldKind::Category => &mut product.category,
        _ => &mut product.note,
    }
}

/// Reads one line into `buf`, keeping at most `max` bytes of it.
///
/// Returns `None` at end of input, otherwise whether the line was cut. The
/// newline and a trailing carriage return are not kept.
fn read_bounded_line<R: BufRead>(
    reader: &mut R,
    max: usize,
    buf: &mut Vec<u8>,
) -> io::Result<Option<bool>> {
    buf.clear();
    let mut truncated = false;
    let mut read_any = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }
        read_any = true;

        let newline = available.iter().position(|b| *b == b'\n');
        let chunk = match newline {
            Some(pos) => &available[..pos],
            None => available,
        };
        let room = max.saturating_sub(buf.len());
        if chunk.len() > room {
            truncated = true;
        }
        buf.extend_from_slice(&chunk[..chunk.len().min(room)]);

        let consumed = chunk.len() + usize::from(newline.is_some());
        reader.consume(consumed);
        if newline.is_some() {
            break;
        }
    }

    if !read_any {
        return Ok(None);
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(Some(truncated))
}
