//! Output ports implemented by the storage crates

use vending_entities::Good;

use crate::error;

/// Where the dispenser keeps its goods
pub trait Stock {
    /// Names in ascending order
    fn names(&self) -> Vec<String>;

    ///
    fn get(&self, name: &str) -> Option<Good>;

    /// Inserts or replaces
    ///
    /// # Errors
    fn save(&mut self, name: String, good: Good) -> error::Result<()>;

    /// # Errors
    fn remove(&mut self, name: &str) -> error::Result<Option<Good>>;
}

/// Receives one line per machine event
pub trait Journal {
    /// # Errors
    fn record(&mut self, subject: &str, action: &str, status: &str) -> error::Result<()>;
}
