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
    clippy::ref_patterns
)]

//! The vending machine itself
//!
//! A [`Dispenser`] owns its stock and the credit a customer has deposited.
//! Every dispense is validate-then-commit: nothing changes unless all of the
//! checks pass.

pub mod error;
pub mod services;
pub mod shared;
pub mod snack;

use services::{Journal, Stock};
use vending_entities::{Good, Inventory};

///
pub struct Dispenser {
    ///
    stock: Box<dyn Stock + Send + Sync>,

    ///
    coins_deposited: u32,

    ///
    journal: Option<Box<dyn Journal + Send + Sync>>,
}

impl Dispenser {
    /// Starts with no credit
    #[inline]
    #[must_use]
    pub fn new(stock: Box<dyn Stock + Send + Sync>) -> Self {
        Self {
            stock,
            coins_deposited: 0,
            journal: None,
        }
    }

    ///
    #[inline]
    pub fn register_journal(&mut self, journal: Box<dyn Journal + Send + Sync>) {
        self.journal = Some(journal);
    }

    ///
    #[inline]
    #[must_use]
    pub const fn credit(&self) -> u32 {
        self.coins_deposited
    }

    ///
    #[inline]
    #[must_use]
    pub fn good(&self, name: &str) -> Option<Good> {
        self.stock.get(name)
    }

    /// Snapshot of everything currently stocked
    #[inline]
    #[must_use]
    pub fn inventory(&self) -> Inventory {
        self.stock
            .names()
            .into_iter()
            .filter_map(|name| self.stock.get(&name).map(|good| (name, good)))
            .collect()
    }

    /// Adds coins to the balance and returns the new balance
    ///
    /// # Errors
    #[inline]
    pub fn deposit(&mut self, coins: u32) -> error::Result<u32> {
        let credit = self
            .coins_deposited
            .checked_add(coins)
            .ok_or(error::MachineError::CreditOverflow)?;

        self.log(&coins.to_string(), "DEPOSIT", "ACCEPTED")?;
        self.coins_deposited = credit;

        Ok(credit)
    }

    /// Hands back whatever credit is left
    ///
    /// # Errors
    #[inline]
    pub fn refund(&mut self) -> error::Result<u32> {
        self.log(&self.coins_deposited.to_string(), "REFUND", "RETURNED")?;

        Ok(core::mem::take(&mut self.coins_deposited))
    }

    /// Adds a new good or replaces an existing one
    ///
    /// # Errors
    #[inline]
    pub fn restock(&mut self, name: &str, good: Good) -> error::Result<()> {
        self.stock.save(name.to_owned(), good)?;
        self.log(name, "RESTOCK", "COMPLETED")?;

        Ok(())
    }

    ///
    /// # Errors
    #[inline]
    pub fn retire(&mut self, name: &str) -> error::Result<Good> {
        let good = self
            .stock
            .remove(name)?
            .ok_or_else(|| error::MachineError::InvalidSelection(name.to_owned()))?;
        self.log(name, "RETIRE", "COMPLETED")?;

        Ok(good)
    }

    /// Dispenses one unit of `name`
    ///
    /// Fails with `InvalidSelection`, `OutOfStock` or `InsufficientFunds`,
    /// checked in that order. Stock and credit are only touched on success.
    ///
    /// # Errors
    #[inline]
    pub fn dispense(&mut self, name: &str) -> error::Result<()> {
        let (previous, credit) = match self.validate(name) {
            Ok(validated) => validated,
            Err(err) => return Err(self.reject(name, err)),
        };

        let dispensed = Good::new(previous.price, previous.remaining_count.saturating_sub(1));
        if let Err(err) = self.stock.save(name.to_owned(), dispensed) {
            return Err(self.reject(name, err));
        }

        if let Err(err) = self.log(name, "DISPENSE", "COMPLETED") {
            self.stock.save(name.to_owned(), previous)?;
            return Err(err);
        }

        // Credit goes last so every failure above leaves it alone
        self.coins_deposited = credit;

        Ok(())
    }

    /// The rejection reason matters more than the journal
    fn reject(&mut self, name: &str, err: error::MachineError) -> error::MachineError {
        self.log(name, "DISPENSE", "REJECTED").ok();
        err
    }

    /// Returns the good as stocked and the balance after paying for it
    fn validate(&self, name: &str) -> error::Result<(Good, u32)> {
        let good = self
            .stock
            .get(name)
            .ok_or_else(|| error::MachineError::InvalidSelection(name.to_owned()))?;

        if !good.in_stock() {
            return Err(error::MachineError::OutOfStock(name.to_owned()));
        }

        let credit = self.coins_deposited.checked_sub(good.price).ok_or(
            error::MachineError::InsufficientFunds {
                coins_needed: good.price.saturating_sub(self.coins_deposited),
            },
        )?;

        Ok((good, credit))
    }

    ///
    fn log(&mut self, subject: &str, action: &str, status: &str) -> error::Result<()> {
        if let &mut Some(ref mut journal) = &mut self.journal {
            journal.record(subject, action, status)?;
        }

        Ok(())
    }
}
