#![warn(clippy::restriction, clippy::pedantic)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    clippy::mod_module_files,
    clippy::self_named_module_files,

    clippy::implicit_return,
    clippy::shadow_reuse,
    clippy::match_ref_pats,

    clippy::question_mark_used,
    clippy::needless_borrowed_reference,
    clippy::absolute_paths,
    clippy::ref_patterns,
    clippy::single_call_fn
)]

//! In-memory adapters for the dispenser's output ports

pub mod error;
pub mod journal;
pub mod repo;

pub use journal::MemoryJournal;

use dispenser::services::Stock;
use repo::{InMemoryRepository, Repository};
use vending_entities::{Good, Inventory};

///
#[non_exhaustive]
pub struct InventoryRepo {
    ///
    pub goods: Box<dyn Repository<Good> + Send + Sync>,
}

impl InventoryRepo {
    ///
    #[inline]
    #[must_use]
    pub fn new(goods: Box<dyn Repository<Good> + Send + Sync>) -> Self {
        Self { goods }
    }
}

impl From<Inventory> for InventoryRepo {
    #[inline]
    fn from(value: Inventory) -> Self {
        Self::new(Box::new(InMemoryRepository::from(value)))
    }
}

impl Stock for InventoryRepo {
    #[inline]
    fn names(&self) -> Vec<String> {
        self.goods.list()
    }

    #[inline]
    fn get(&self, name: &str) -> Option<Good> {
        self.goods.get(name)
    }

    #[inline]
    fn save(&mut self, name: String, good: Good) -> dispenser::error::Result<()> {
        self.goods.save(name, good)?;
        Ok(())
    }

    #[inline]
    fn remove(&mut self, name: &str) -> dispenser::error::Result<Option<Good>> {
        let removed = self.goods.remove(name)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod test {
    use dispenser::{error::MachineError, Dispenser};
    use vending_entities::default_inventory;

    use super::*;

    #[test]
    fn dispenser_over_repo() {
        let mut dispenser = Dispenser::new(Box::new(InventoryRepo::from(default_inventory())));
        dispenser.deposit(10).expect("deposit");

        dispenser.dispense("Chips").expect("chips");

        assert_eq!(0, dispenser.credit());
        assert_eq!(Some(Good::new(10, 3)), dispenser.good("Chips"));
        assert!(matches!(
            dispenser.dispense("Soda"),
            Err(MachineError::InvalidSelection(_))
        ));
    }

    #[test]
    fn memory_journal_records_machine_events() {
        let journal = MemoryJournal::new();
        let mut dispenser = Dispenser::new(Box::new(InventoryRepo::from(default_inventory())));
        dispenser.register_journal(Box::new(journal.clone()));

        dispenser.deposit(10).expect("deposit");
        dispenser.dispense("Cakes").ok();
        dispenser.dispense("Chips").expect("chips");

        assert_eq!(
            vec![
                "(DEPOSIT) [ACCEPTED] 10",
                "(DISPENSE) [REJECTED] Cakes",
                "(DISPENSE) [COMPLETED] Chips",
            ],
            journal.lines().expect("lines")
        );
    }

    #[test]
    fn inventory_snapshot() {
        let dispenser = Dispenser::new(Box::new(InventoryRepo::from(default_inventory())));

        assert_eq!(default_inventory(), dispenser.inventory());
    }
}
