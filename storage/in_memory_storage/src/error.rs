#![allow(clippy::std_instead_of_core)]

//!

use dispenser::error::MachineError;
use thiserror::Error;

///
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InMemoryStorage {
    ///
    #[error("Get out! Lock has been poisoned: {0}")]
    LockingError(String),
}

impl From<InMemoryStorage> for MachineError {
    #[inline]
    fn from(val: InMemoryStorage) -> Self {
        MachineError::Other { source: val.into() }
    }
}

///
pub type Result<T> = std::result::Result<T, InMemoryStorage>;
