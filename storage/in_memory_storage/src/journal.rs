//! Journal that keeps its lines in memory

extern crate alloc;
use alloc::sync::Arc;

use std::sync::Mutex;

use dispenser::services::Journal;

use crate::error;

/// Clones share the same lines
#[derive(Clone, Default)]
pub struct MemoryJournal {
    ///
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryJournal {
    ///
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// # Errors
    #[inline]
    pub fn lines(&self) -> error::Result<Vec<String>> {
        let lines = self
            .lines
            .lock()
            .map_err(|err| error::InMemoryStorage::LockingError(err.to_string()))?;

        Ok(lines.clone())
    }

    ///
    fn push(&self, line: String) -> error::Result<()> {
        self.lines
            .lock()
            .map_err(|err| error::InMemoryStorage::LockingError(err.to_string()))?
            .push(line);

        Ok(())
    }
}

impl Journal for MemoryJournal {
    #[inline]
    fn record(
        &mut self,
        subject: &str,
        action: &str,
        status: &str,
    ) -> dispenser::error::Result<()> {
        self.push(format!("({action}) [{status}] {subject}"))?;
        Ok(())
    }
}
