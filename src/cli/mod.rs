//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// buddynotes - keep private notes about your chat contacts
#[derive(Parser, Debug)]
#[command(name = "buddynotes", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/buddynotes/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Saved notes file (overrides the config file)
    #[arg(short = 's', long, global = true)]
    pub store: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add, list or delete notes for a contact
    Notes(NotesArgs),

    /// Print all saved notes
    Dump(DumpArgs),

    /// List the contacts notes can be attached to
    Contacts(ContactsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `notes` command
#[derive(Parser, Debug)]
pub struct NotesArgs {
    /// Contact nick
    pub nick: String,

    /// add, list or del
    pub subcommand: String,

    /// Note text for `add`, index for `del`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

/// Arguments for the `dump` command
#[derive(Parser, Debug)]
pub struct DumpArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `contacts` command
#[derive(Parser, Debug)]
pub struct ContactsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    pub shell: Shell,
}
