#![allow(clippy::std_instead_of_core)]

//!

use std::io;

use dispenser::error::MachineError;
use thiserror::Error;

///
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FileJournal {
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
}

impl From<FileJournal> for MachineError {
    #[inline]
    fn from(value: FileJournal) -> Self {
        MachineError::Other {
            source: value.into(),
        }
    }
}

///
pub type Result<T> = std::result::Result<T, FileJournal>;
