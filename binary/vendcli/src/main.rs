#![warn(clippy::restriction, clippy::pedantic)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::implicit_return,
    clippy::shadow_reuse,
    clippy::match_ref_pats,
    clippy::shadow_unrelated,
    clippy::shadow_same,
    clippy::question_mark_used,
    clippy::absolute_paths,
    clippy::single_call_fn,
    clippy::ref_patterns,

    clippy::min_ident_chars,
)]

//! Command line front end for the snack machine

mod commands;
mod config;
mod constants;
mod engine;
mod session;

use clap::Parser;
use dotenv::dotenv;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = commands::Cli::parse();

    let config = config::Configuration::load()?;
    let (mut machine, session) = engine::Machine::init(config)?;

    cli.command.execute(&mut machine)?;
    drop(session);

    if cli.trace {
        machine.print_trace()?;
    }

    Ok(())
}
