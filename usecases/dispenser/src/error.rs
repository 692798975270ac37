#![allow(clippy::std_instead_of_core)]

//!

use std::io;

use thiserror::Error;

/// Everything a dispense attempt can come back with
///
/// The first three are the expected outcomes of a normal call. Anything else
/// means the machine or one of its adapters misbehaved.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MachineError {
    ///
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    ///
    #[error("Out of stock: {0}")]
    OutOfStock(String),

    ///
    #[error("Insufficient funds, {coins_needed} more coins needed")]
    InsufficientFunds {
        /// Shortfall between the price and the deposited credit
        coins_needed: u32,
    },

    ///
    #[error("Deposit would overflow the credit balance")]
    CreditOverflow,

    ///
    #[error("Get out of here! The Lock is poisoned: {0}")]
    PoisonedLock(String),

    ///
    #[error(transparent)]
    Io {
        ///
        #[from]
        source: io::Error,
    },

    /// Errors raised by `Stock` and `Journal` adapters
    #[error(transparent)]
    Other {
        ///
        source: anyhow::Error,
    },
}

///
pub type Result<T> = core::result::Result<T, MachineError>;
