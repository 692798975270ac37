#![warn(clippy::restriction, clippy::pedantic)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    clippy::mod_module_files,
    clippy::self_named_module_files,

    clippy::implicit_return,
    clippy::shadow_reuse,
    clippy::match_ref_pats,

    clippy::question_mark_used,
)]

//! Appends machine events to a log file, one timestamped line each

pub mod error;

///
mod constants;

extern crate alloc;
use alloc::sync::Arc;

use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::RwLock,
};

use chrono::offset::Local;
use dispenser::services::Journal;

/// Clones append to the same file
#[derive(Clone)]
pub struct FileJournal {
    ///
    logger: Arc<RwLock<File>>,
}

impl From<File> for FileJournal {
    #[inline]
    fn from(value: File) -> Self {
        Self {
            logger: Arc::new(RwLock::new(value)),
        }
    }
}

impl FileJournal {
    /// Creates the file if needed and appends to it
    ///
    /// # Errors
    #[inline]
    pub fn open(path: &Path) -> error::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from(file))
    }

    ///
    fn write_line(&self, subject: &str, action: &str, status: &str) -> error::Result<()> {
        let now = Local::now();
        let now = now.format(constants::DATETIME_FORMAT).to_string();

        let mut logger = self
            .logger
            .write()
            .map_err(|err| error::FileJournal::PoisonedLock(err.to_string()))?;
        logger.write_all(format!("{now} ({action}) [{status}] {subject}\n").as_bytes())?;

        Ok(())
    }
}

impl Journal for FileJournal {
    #[inline]
    fn record(
        &mut self,
        subject: &str,
        action: &str,
        status: &str,
    ) -> dispenser::error::Result<()> {
        self.write_line(subject, action, status)?;
        Ok(())
    }
}
