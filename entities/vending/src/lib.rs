#![warn(clippy::restriction, clippy::pedantic)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    clippy::mod_module_files,
    clippy::self_named_module_files,

    clippy::implicit_return,
    clippy::shadow_reuse,
    clippy::match_ref_pats,
)]

//! Data types that get passed between the dispenser and its adapters

extern crate alloc;
use alloc::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A purchasable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Good {
    ///
    pub price: u32,

    /// Units left in the machine
    pub remaining_count: u32,
}

impl Good {
    ///
    #[must_use]
    #[inline]
    pub const fn new(price: u32, remaining_count: u32) -> Self {
        Self {
            price,
            remaining_count,
        }
    }

    ///
    #[must_use]
    #[inline]
    pub const fn in_stock(&self) -> bool {
        self.remaining_count > 0
    }
}

/// Good name -> Good
pub type Inventory = BTreeMap<String, Good>;

/// The stock the machine ships with
#[must_use]
#[inline]
pub fn default_inventory() -> Inventory {
    let mut inventory = Inventory::new();
    inventory.insert("Cakes".to_owned(), Good::new(12, 7));
    inventory.insert("Chips".to_owned(), Good::new(10, 4));
    inventory.insert("Cookies".to_owned(), Good::new(7, 11));

    inventory
}
