#![allow(clippy::print_stdout)]

//!

use std::path::Path;

use anyhow::Context as _;
use dispenser::{error::MachineError, services::Journal, Dispenser};
use in_memory_storage::{InventoryRepo, MemoryJournal};
use local_file_journal::FileJournal;
use media_entities::{count_kinds, demo_library, thing::demo_things};
use snack_selector::Preferences;

use crate::{config::Configuration, constants, session::SessionGuard};

/// What to tell the customer after a dispense attempt
fn outcome_message(name: &str, result: &dispenser::error::Result<()>) -> String {
    match result {
        &Ok(()) => format!("Dispensing {name}\nSuccess! Yum."),
        &Err(MachineError::InvalidSelection(_)) => "Invalid Selection.".to_owned(),
        &Err(MachineError::OutOfStock(_)) => "Out of Stock.".to_owned(),
        &Err(MachineError::InsufficientFunds { coins_needed }) => {
            format!("Insufficient funds. Please insert an additional {coins_needed} coins.")
        }
        &Err(ref err) => format!("Unexpected error: {err}."),
    }
}

///
pub struct Machine {
    ///
    dispenser: Dispenser,

    ///
    preferences: Preferences,

    /// Only set when no log file is configured
    trace: Option<MemoryJournal>,
}

impl Machine {
    /// The returned guard has to outlive every command run on the machine
    pub fn init(config: Configuration) -> anyhow::Result<(Self, SessionGuard)> {
        let Configuration {
            machine,
            selector,
            log,
        } = config;

        let mut dispenser = Dispenser::new(Box::new(InventoryRepo::from(machine.inventory)));

        let (session_journal, trace): (Box<dyn Journal + Send + Sync>, Option<MemoryJournal>) =
            if let Some(path) = log.path {
                let journal = FileJournal::open(Path::new(&path))
                    .with_context(|| format!("Unable to open log file at {path}"))?;
                dispenser.register_journal(Box::new(journal.clone()));

                (Box::new(journal), None)
            } else {
                let journal = MemoryJournal::new();
                dispenser.register_journal(Box::new(journal.clone()));

                (Box::new(journal.clone()), Some(journal))
            };

        let session = SessionGuard::open(session_journal, constants::SESSION_NAME)?;

        if machine.coins_deposited > 0 {
            dispenser.deposit(machine.coins_deposited)?;
        }

        let machine = Self {
            dispenser,
            preferences: selector,
            trace,
        };

        Ok((machine, session))
    }

    ///
    /// `None` when the journal goes to a log file instead
    pub fn trace_lines(&self) -> anyhow::Result<Option<Vec<String>>> {
        let lines = self.trace.as_ref().map(MemoryJournal::lines).transpose()?;
        Ok(lines)
    }

    /// Call after the session guard is dropped so the closing line shows up
    pub fn print_trace(&self) -> anyhow::Result<()> {
        if let Some(lines) = self.trace_lines()? {
            for line in lines {
                println!("{line}");
            }
        } else {
            println!("No trace available, journal lines go to the configured log file");
        }

        Ok(())
    }

    ///
    pub fn handle_list(&self, json: bool) -> anyhow::Result<()> {
        let inventory = self.dispenser.inventory();

        if json {
            println!("{}", serde_json::to_string_pretty(&inventory)?);
            return Ok(());
        }

        for (name, good) in &inventory {
            println!(
                "{name}: {} coins, {} left",
                good.price, good.remaining_count
            );
        }
        println!("Credit: {}", self.dispenser.credit());

        Ok(())
    }

    ///
    pub fn handle_vend(&mut self, coins: u32, names: &[String]) -> anyhow::Result<()> {
        self.insert_coins(coins)?;

        for name in names {
            let result = self.dispenser.dispense(name);
            println!("{}", outcome_message(name, &result));
        }

        self.print_change()
    }

    ///
    pub fn handle_buy(&mut self, coins: u32, requester: &str) -> anyhow::Result<()> {
        self.insert_coins(coins)?;

        let name = self.preferences.resolve_preference(requester).to_owned();
        let result = self.preferences.buy_favorite(requester, &mut self.dispenser);
        println!("{}", outcome_message(&name, &result));

        self.print_change()
    }

    ///
    pub fn handle_prefer(&self, requester: &str) {
        println!("{}", self.preferences.resolve_preference(requester));
    }

    ///
    fn insert_coins(&mut self, coins: u32) -> anyhow::Result<()> {
        if coins > 0 {
            let credit = self.dispenser.deposit(coins)?;
            println!("Credit: {credit}");
        }

        Ok(())
    }

    ///
    fn print_change(&mut self) -> anyhow::Result<()> {
        let change = self.dispenser.refund()?;
        println!("Change returned: {change}");

        Ok(())
    }
}

///
pub fn handle_library() {
    let library = demo_library();

    println!("{}", count_kinds(&library));
    for item in &library {
        println!("{item}");
    }
}

///
pub fn handle_things() {
    for thing in demo_things() {
        println!("{}", thing.describe());
    }
}

#[cfg(test)]
mod test {
    use std::{env, fs, process};

    use vending_entities::Good;

    use super::*;

    fn machine() -> (Machine, SessionGuard) {
        Machine::init(Configuration::default()).expect("default machine")
    }

    #[test]
    fn messages() {
        assert_eq!(
            "Dispensing Chips\nSuccess! Yum.",
            outcome_message("Chips", &Ok(()))
        );
        assert_eq!(
            "Invalid Selection.",
            outcome_message("Soda", &Err(MachineError::InvalidSelection("Soda".into())))
        );
        assert_eq!(
            "Out of Stock.",
            outcome_message("Gum", &Err(MachineError::OutOfStock("Gum".into())))
        );
        assert_eq!(
            "Insufficient funds. Please insert an additional 2 coins.",
            outcome_message(
                "Cakes",
                &Err(MachineError::InsufficientFunds { coins_needed: 2 })
            )
        );
        assert_eq!(
            "Unexpected error: Deposit would overflow the credit balance.",
            outcome_message("Cakes", &Err(MachineError::CreditOverflow))
        );
    }

    #[test]
    fn vend_then_change() {
        let (mut machine, _session) = machine();

        machine
            .handle_vend(15, &["Chips".to_owned(), "Cakes".to_owned()])
            .expect("vend");

        assert_eq!(0, machine.dispenser.credit());
        assert_eq!(Some(Good::new(10, 3)), machine.dispenser.good("Chips"));
        assert_eq!(Some(Good::new(12, 7)), machine.dispenser.good("Cakes"));

        let lines = machine
            .trace_lines()
            .expect("lines")
            .expect("in-memory journal");
        assert_eq!(
            vec![
                "(SESSION) [OPENED] vendcli",
                "(DEPOSIT) [ACCEPTED] 15",
                "(DISPENSE) [COMPLETED] Chips",
                "(DISPENSE) [REJECTED] Cakes",
                "(REFUND) [RETURNED] 5",
            ],
            lines
        );
    }

    #[test]
    fn trace_ends_with_closed_session() {
        let (mut machine, session) = machine();

        machine.handle_vend(7, &["Cookies".to_owned()]).expect("vend");
        drop(session);

        let lines = machine
            .trace_lines()
            .expect("lines")
            .expect("in-memory journal");
        assert_eq!(
            Some("(SESSION) [CLOSED] vendcli"),
            lines.last().map(String::as_str)
        );
    }

    #[test]
    fn no_trace_with_log_file() {
        let path = env::temp_dir().join(format!("vendcli-trace-{}.log", process::id()));
        let mut config = Configuration::default();
        config.log.path = Some(path.display().to_string());

        let (machine, session) = Machine::init(config).expect("machine with log file");
        let lines = machine.trace_lines().expect("lines");
        drop(session);
        fs::remove_file(&path).ok();

        assert!(lines.is_none());
    }

    #[test]
    fn buy_for_duke() {
        let (mut machine, _session) = machine();

        machine.handle_buy(7, "Duke").expect("buy");

        assert_eq!(Some(Good::new(7, 10)), machine.dispenser.good("Cookies"));
    }
}
