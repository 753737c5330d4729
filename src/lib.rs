//! buddynotes - private notes attached to chat contacts

pub mod cli;
pub mod domain;
pub mod host;
pub mod infra;
pub mod session;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_contacts, handle_dump, handle_notes},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    infra::init_logging(cli.verbose)?;

    let config = Config::load(cli.config.as_deref())?;
    let store_path = config.store_path(cli.store.as_ref());

    match &cli.command {
        Command::Notes(args) => handle_notes(args, &config, &store_path),
        Command::Dump(args) => handle_dump(args, &config, &store_path),
        Command::Contacts(args) => handle_contacts(args, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
