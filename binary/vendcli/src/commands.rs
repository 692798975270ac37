//!

use crate::engine;
use clap::{Parser, Subcommand};

///
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the journal lines recorded during the command
    #[arg(short, long, global = true, default_value_t = false)]
    pub trace: bool,

    ///
    #[command(subcommand)]
    pub command: Commands,
}

///
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show what is in the machine
    List {
        ///
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Insert coins and dispense each named good in turn
    Vend {
        ///
        #[arg(short, long, default_value_t = 0)]
        coins: u32,

        ///
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Insert coins and dispense the requester's favorite
    Buy {
        ///
        #[arg(short, long, default_value_t = 0)]
        coins: u32,

        ///
        requester: String,
    },

    /// Show which good a requester would get
    Prefer {
        ///
        requester: String,
    },

    /// Summarise the media library
    Library,

    /// Describe a bag of mixed values
    Things,
}

impl Commands {
    ///
    pub fn execute(self, machine: &mut engine::Machine) -> anyhow::Result<()> {
        match self {
            Self::List { json } => machine.handle_list(json)?,
            Self::Vend { coins, names } => machine.handle_vend(coins, &names)?,
            Self::Buy { coins, requester } => machine.handle_buy(coins, &requester)?,
            Self::Prefer { requester } => machine.handle_prefer(&requester),
            Self::Library => engine::handle_library(),
            Self::Things => engine::handle_things(),
        }

        Ok(())
    }
}
