//! Terminal rendering for products and command messages.
//!
//! Everything renders into a `String` so the menu can write to any sink and
//! tests can inspect output without a terminal. Column layout (truncation,
//! padding) is measured in display width, not bytes.

use colored::{Color, Colorize};
use std::io::IsTerminal;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::model::Product;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const ID_WIDTH: usize = 6;
const INDENT: &str = "      ";

fn paint(text: &str, use_color: bool, color: Color) -> String {
    if use_color {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

pub fn stdout_supports_color() -> bool {
    std::io::stdout().is_terminal()
}

pub fn render_products(products: &[Product], use_color: bool) -> String {
    let mut out = String::new();
    for (i, product) in products.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_product(product, use_color));
    }
    out
}

fn render_product(product: &Product, use_color: bool) -> String {
    let id = format!("#{:<width$}", product.id, width = ID_WIDTH - 1);
    let category = if product.category.is_empty() {
        String::new()
    } else {
        format!("[{}]", product.category)
    };
    let available = LINE_WIDTH
        .saturating_sub(ID_WIDTH)
        .saturating_sub(category.width() + 1);
    let name = truncate_to_width(&product.name, available);
    let padding = " ".repeat(available.saturating_sub(name.width()) + 1);

    let mut out = format!(
        "{}{}{}{}\n",
        paint(&id, use_color, Color::Yellow),
        paint(&name, use_color, Color::BrightWhite),
        padding,
        paint(&category, use_color, Color::BrightBlack),
    );

    if !product.description.is_empty() {
        let width = LINE_WIDTH.saturating_sub(INDENT.len());
        out.push_str(INDENT);
        out.push_str(&truncate_to_width(&product.description, width));
        out.push('\n');
    }

    out.push_str(&format!(
        "{}Quantity: {}   Unit price: {:.2}   Discount: {:.2}   Value: {:.2}\n",
        INDENT,
        product.quantity,
        product.unit_price,
        product.discount,
        product.stock_value()
    ));

    if !product.note.is_empty() {
        let note = format!("Note: {}", product.note);
        let width = LINE_WIDTH.saturating_sub(INDENT.len());
        out.push_str(INDENT);
        out.push_str(&paint(
            &truncate_to_width(&note, width),
            use_color,
            Color::BrightBlack,
        ));
        out.push('\n');
    }
    out
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|message| {
            let color = match message.level {
                MessageLevel::Info => Color::BrightBlack,
                MessageLevel::Success => Color::Green,
                MessageLevel::Warning => Color::Yellow,
                MessageLevel::Error => Color::Red,
            };
            format!("{}\n", paint(&message.content, use_color, color))
        })
        .collect()
}

pub fn render_error(error: &impl std::fmt::Display, use_color: bool) -> String {
    format!(
        "{}\n",
        paint(&format!("Error: {}", error), use_color, Color::Red)
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> Product {
        Product {
            id: 3,
            name: name.to_string(),
            description: "Fixes everything".to_string(),
            category: "Tool".to_string(),
            quantity: 4,
            unit_price: 4.5,
            discount: 0.5,
            note: String::new(),
        }
    }

    #[test]
    fn renders_product_block() {
        let output = render_products(&[product("Duct tape")], false);

        assert!(output.starts_with("#3    Duct tape"));
        assert!(output.contains("[Tool]"));
        assert!(output.contains("Fixes everything"));
        assert!(output.contains("Quantity: 4"));
        assert!(output.contains("Value: 16.00"));
        assert!(!output.contains("Note:"));
    }

    #[test]
    fn header_line_fits_width() {
        let output = render_products(&[product(&"Ω".repeat(200))], false);
        let header = output.lines().next().unwrap();
        assert_eq!(header.width(), LINE_WIDTH);
        assert!(header.contains('…'));
    }

    #[test]
    fn long_description_is_cut_for_display() {
        let mut p = product("LongItem");
        p.description = "A".repeat(1020);
        let output = render_products(&[p], false);
        let line = output.lines().nth(1).unwrap();
        assert_eq!(line.width(), LINE_WIDTH);
    }

    #[test]
    fn messages_render_one_per_line() {
        let messages = vec![
            CmdMessage::warning("Warning: line 2 is corrupt"),
            CmdMessage::success("Load complete"),
        ];
        assert_eq!(
            render_messages(&messages, false),
            "Warning: line 2 is corrupt\nLoad complete\n"
        );
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
        assert_eq!(truncate_to_width("short", 10), "short");
    }
}
