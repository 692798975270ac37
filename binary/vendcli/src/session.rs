//!

use dispenser::services::Journal;

/// Marks the start and end of one CLI invocation in the journal
///
/// The closing line is written from `Drop`, so it lands on every way out of
/// `main`, errors included.
pub struct SessionGuard {
    ///
    journal: Box<dyn Journal + Send + Sync>,

    ///
    name: String,
}

impl SessionGuard {
    ///
    pub fn open(mut journal: Box<dyn Journal + Send + Sync>, name: &str) -> anyhow::Result<Self> {
        journal.record(name, "SESSION", "OPENED")?;

        Ok(Self {
            journal,
            name: name.to_owned(),
        })
    }
}

impl Drop for SessionGuard {
    #[inline]
    fn drop(&mut self) {
        // Nowhere left to report a failure to
        self.journal.record(&self.name, "SESSION", "CLOSED").ok();
    }
}

#[cfg(test)]
mod test {
    use in_memory_storage::MemoryJournal;

    use super::*;

    #[test]
    fn closes_on_drop() {
        let journal = MemoryJournal::new();

        {
            let _session = SessionGuard::open(Box::new(journal.clone()), "demo").expect("open");
        }

        assert_eq!(
            vec!["(SESSION) [OPENED] demo", "(SESSION) [CLOSED] demo"],
            journal.lines().expect("lines")
        );
    }

    #[test]
    fn closes_on_early_return() {
        fn failing(journal: &MemoryJournal) -> anyhow::Result<()> {
            let _session = SessionGuard::open(Box::new(journal.clone()), "demo")?;
            anyhow::bail!("command failed")
        }

        let journal = MemoryJournal::new();

        assert!(failing(&journal).is_err());
        assert_eq!(
            Some("(SESSION) [CLOSED] demo"),
            journal.lines().expect("lines").last().map(String::as_str)
        );
    }
}
