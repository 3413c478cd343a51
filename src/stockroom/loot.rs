use crate::model::NewProduct;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Anything that can hand out a candidate product on demand.
pub trait LootSource {
    fn roll(&mut self) -> NewProduct;
}

struct LootItem {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    quantity: (u32, u32),
    unit_price: f64,
    discount: f64,
    note: &'static str,
}

const TABLE: &[LootItem] = &[
    LootItem {
        name: "Ultimate Healing Potion",
        description: "Restores all health in one gulp",
        category: "Potion",
        quantity: (1, 3),
        unit_price: 150.0,
        discount: 0.0,
        note: "Keep away from light",
    },
    LootItem {
        name: "Duct tape",
        description: "Fixes armour, boots and the occasional wound",
        category: "Tool",
        quantity: (1, 10),
        unit_price: 4.5,
        discount: 0.5,
        note: "",
    },
    LootItem {
        name: "Sterile bandage",
        description: "Wraps cuts and scrapes",
        category: "Dressing",
        quantity: (5, 20),
        unit_price: 2.0,
        discount: 0.0,
        note: "",
    },
    LootItem {
        name: "Antidote",
        description: "Neutralises common venoms",
        category: "Potion",
        quantity: (1, 5),
        unit_price: 35.0,
        discount: 5.0,
        note: "Shake before use",
    },
    LootItem {
        name: "Splint kit",
        description: "Two wooden slats and a roll of cloth",
        category: "Tool",
        quantity: (1, 4),
        unit_price: 12.0,
        discount: 0.0,
        note: "",
    },
    LootItem {
        name: "Mana herb",
        description: "Chewed raw, tastes like regret",
        category: "Herb",
        quantity: (3, 12),
        unit_price: 7.25,
        discount: 1.25,
        note: "Dries out after a week",
    },
];

/// Picks uniformly from a fixed table of supplies.
pub struct LootTable {
    rng: StdRng,
}

impl LootTable {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        TABLE.iter().map(|item| item.name)
    }
}

impl Default for LootTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LootSource for LootTable {
    fn roll(&mut self) -> NewProduct {
        let item = &TABLE[self.rng.gen_range(0..TABLE.len())];
        let (low, high) = item.quantity;
        NewProduct {
            name: item.name.to_string(),
            description: item.description.to_string(),
            category: item.category.to_string(),
            quantity: self.rng.gen_range(low..=high),
            unit_price: item.unit_price,
            discount: item.discount,
            note: item.note.to_string(),
        }
    }
}

/// Replays a fixed list of products in order, cycling when exhausted.
#[cfg(any(test, feature = "test_utils"))]
pub struct ScriptedLoot {
    items: Vec<NewProduct>,
    next: usize,
}

#[cfg(any(test, feature = "test_utils"))]
impl ScriptedLoot {
    pub fn new(items: Vec<NewProduct>) -> Self {
        assert!(!items.is_empty(), "ScriptedLoot needs at least one item");
        Self { items, next: 0 }
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl LootSource for ScriptedLoot {
    fn roll(&mut self) -> NewProduct {
        let item = self.items[self.next % self.items.len()].clone();
        self.next += 1;
        item
    }
}
