//!

use crate::{error, Dispenser};

/// A snack that has already come out of the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchasedSnack {
    ///
    name: String,
}

impl PurchasedSnack {
    /// Only produces a value when the dispense went through
    ///
    /// # Errors
    #[inline]
    pub fn purchase(name: &str, dispenser: &mut Dispenser) -> error::Result<Self> {
        dispenser.dispense(name)?;

        Ok(Self {
            name: name.to_owned(),
        })
    }

    ///
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
