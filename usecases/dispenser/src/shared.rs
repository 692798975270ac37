//! A dispenser several threads can hit at once

extern crate alloc;
use alloc::sync::Arc;

use std::sync::{Mutex, MutexGuard};

use vending_entities::Good;

use crate::{error, Dispenser};

/// Every call holds the lock for the whole check-then-commit sequence, so two
/// callers can never both see the last unit in stock.
#[derive(Clone)]
pub struct SharedDispenser {
    ///
    inner: Arc<Mutex<Dispenser>>,
}

impl From<Dispenser> for SharedDispenser {
    #[inline]
    fn from(value: Dispenser) -> Self {
        Self {
            inner: Arc::new(Mutex::new(value)),
        }
    }
}

impl SharedDispenser {
    ///
    /// # Errors
    #[inline]
    pub fn dispense(&self, name: &str) -> error::Result<()> {
        self.lock()?.dispense(name)
    }

    ///
    /// # Errors
    #[inline]
    pub fn deposit(&self, coins: u32) -> error::Result<u32> {
        self.lock()?.deposit(coins)
    }

    ///
    /// # Errors
    #[inline]
    pub fn credit(&self) -> error::Result<u32> {
        Ok(self.lock()?.credit())
    }

    ///
    /// # Errors
    #[inline]
    pub fn good(&self, name: &str) -> error::Result<Option<Good>> {
        Ok(self.lock()?.good(name))
    }

    ///
    fn lock(&self) -> error::Result<MutexGuard<'_, Dispenser>> {
        self.inner
            .lock()
            .map_err(|err| error::MachineError::PoisonedLock(err.to_string()))
    }
}
