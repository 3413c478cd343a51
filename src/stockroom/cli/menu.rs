//! Numeric menu loop.
//!
//! Reads one line per answer from any `BufRead`, so the same loop serves an
//! interactive terminal and piped scripts. End of input behaves like `9`.

use super::render::{render_error, render_messages, render_products};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use stockroom::api::{parse_id, CmdResult, InventoryApi};
use stockroom::error::Result;
use stockroom::loot::LootSource;
use stockroom::model::{Product, ProductInput, ProductPatch};
use stockroom::store::DataStore;
use tracing::debug;

const MENU: &str = "\
1. Display inventory
2. Add a product
3. Delete a product
4. Modify a product
5. Find a product
6. Save
7. Load
8. Random loot
9. Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Add,
    Delete,
    Modify,
    Find,
    Save,
    Load,
    Loot,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Display),
            "2" => Ok(MenuChoice::Add),
            "3" => Ok(MenuChoice::Delete),
            "4" => Ok(MenuChoice::Modify),
            "5" => Ok(MenuChoice::Find),
            "6" => Ok(MenuChoice::Save),
            "7" => Ok(MenuChoice::Load),
            "8" => Ok(MenuChoice::Loot),
            "9" => Ok(MenuChoice::Quit),
            other => Err(format!("Invalid choice: {}", other)),
        }
    }
}

/// Terminal side of a session: where answers come from and output goes.
pub struct Console<R, W> {
    input: R,
    out: W,
    use_color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W, use_color: bool) -> Self {
        Self {
            input,
            out,
            use_color,
        }
    }

    /// Prints `label` and reads one answer. `None` at end of input.
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(answer))
    }

    fn show(&mut self, result: Result<CmdResult>) -> io::Result<()> {
        match result {
            Ok(result) => {
                if !result.listed_products.is_empty() {
                    let rendered = render_products(&result.listed_products, self.use_color);
                    write!(self.out, "{}", rendered)?;
                }
                write!(
                    self.out,
                    "{}",
                    render_messages(&result.messages, self.use_color)
                )
            }
            Err(e) => write!(self.out, "{}", render_error(&e, self.use_color)),
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}

/// Runs the menu until the user quits or input ends.
pub fn run<S, L, R, W>(
    api: &mut InventoryApi<S, L>,
    console: &mut Console<R, W>,
    data_path: PathBuf,
) -> io::Result<()>
where
    S: DataStore,
    L: LootSource,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(console.out, "\n{}", MENU)?;
        let Some(answer) = console.ask("> ")? else {
            break;
        };
        if answer.trim().is_empty() {
            continue;
        }

        let choice = match answer.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                writeln!(console.out, "{}", e)?;
                continue;
            }
        };
        debug!(?choice, "menu choice");

        let result = match choice {
            MenuChoice::Display => api.display(),
            MenuChoice::Add => match ask_product(console)? {
                Some(input) => api.add_manual(&input),
                None => break,
            },
            MenuChoice::Delete => match console.ask("Product id to delete: ")? {
                Some(raw) => parse_id(&raw).and_then(|id| api.delete(id)),
                None => break,
            },
            MenuChoice::Modify => match modify(api, console)? {
                Some(result) => result,
                None => break,
            },
            MenuChoice::Find => match console.ask("Product id to find: ")? {
                Some(raw) => parse_id(&raw).and_then(|id| api.find(id)),
                None => break,
            },
            MenuChoice::Save => api.save(&data_path),
            MenuChoice::Load => api.load(&data_path),
            MenuChoice::Loot => api.add_random(),
            MenuChoice::Quit => break,
        };
        console.show(result)?;
    }

    let farewell = api.quit();
    console.show(farewell)
}

fn ask_product<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<ProductInput>> {
    let mut answers = Vec::with_capacity(FIELD_PROMPTS.len());
    for label in FIELD_PROMPTS {
        match console.ask(&format!("{}: ", label))? {
            Some(answer) => answers.push(answer),
            None => return Ok(None),
        }
    }
    let mut answers = answers.into_iter();
    Ok(Some(ProductInput {
        name: answers.next().unwrap_or_default(),
        description: answers.next().unwrap_or_default(),
        category: answers.next().unwrap_or_default(),
        quantity: answers.next().unwrap_or_default(),
        unit_price: answers.next().unwrap_or_default(),
        discount: answers.next().unwrap_or_default(),
        note: answers.next().unwrap_or_default(),
    }))
}

const FIELD_PROMPTS: [&str; 7] = [
    "Name",
    "Description",
    "Category",
    "Quantity",
    "Unit price",
    "Discount",
    "Note",
];

/// Asks for an id, checks it exists, then asks for each field showing the
/// current value. A blank answer keeps it.
fn modify<S, L, R, W>(
    api: &mut InventoryApi<S, L>,
    console: &mut Console<R, W>,
) -> io::Result<Option<Result<CmdResult>>>
where
    S: DataStore,
    L: LootSource,
    R: BufRead,
    W: Write,
{
    let Some(raw) = console.ask("Product id to modify: ")? else {
        return Ok(None);
    };
    let current = match parse_id(&raw).and_then(|id| api.find(id)) {
        Ok(mut found) => match found.listed_products.pop() {
            Some(product) => product,
            None => return Ok(Some(Ok(found))),
        },
        Err(e) => return Ok(Some(Err(e))),
    };

    writeln!(console.out, "Leave a field blank to keep its value.")?;
    let mut answers = Vec::with_capacity(FIELD_PROMPTS.len());
    for (label, value) in FIELD_PROMPTS.iter().zip(current_values(&current)) {
        match console.ask(&format!("{} [{}]: ", label, value))? {
            Some(answer) if answer.trim().is_empty() => answers.push(None),
            Some(answer) => answers.push(Some(answer)),
            None => return Ok(None),
        }
    }
    let mut answers = answers.into_iter();
    let patch = ProductPatch {
        name: answers.next().flatten(),
        description: answers.next().flatten(),
        category: answers.next().flatten(),
        quantity: answers.next().flatten(),
        unit_price: answers.next().flatten(),
        discount: answers.next().flatten(),
        note: answers.next().flatten(),
    };
    Ok(Some(api.modify(current.id, &patch)))
}

fn current_values(product: &Product) -> [String; 7] {
    [
        product.name.clone(),
        product.description.clone(),
        product.category.clone(),
        product.quantity.to_string(),
        product.unit_price.to_string(),
        product.discount.to_string(),
        product.note.clone(),
    ]
}
