//! Command handlers for the CLI.

mod contacts;
mod dump;
mod notes;


use anyhow::{Context, Result};
use clap::CommandFactory;
use std::path::Path;

use super::config::Config;
use super::{Cli, CompletionsArgs};
use crate::host::{MessageSink, Roster};
use crate::infra::read_blob;
use crate::session::NotesSession;

// Re-export public items
pub use contacts::handle_contacts;
pub use dump::handle_dump;
pub use notes::handle_notes;

// Re-export for tests
#[cfg(test)]
pub(crate) use dump::{dump_listings, format_dump};
#[cfg(test)]
pub(crate) use notes::handle_notes_impl;

// ===========================================
// Shared Utilities
// ===========================================

/// Starts a session over the configured roster and loads the saved notes.
pub(crate) fn open_session<S: MessageSink>(
    config: &Config,
    store_path: &Path,
    sink: S,
) -> Result<NotesSession<Roster, S>> {
    let blob = read_blob(store_path)
        .with_context(|| format!("failed to read notes from {}", store_path.display()))?;

    let mut session = NotesSession::start(config.roster(), sink, config.options);
    let report = session.load(blob.as_deref());
    if report.blocks_dropped > 0 {
        log::warn!(
            "event=store_load status=partial dropped={} path={}",
            report.blocks_dropped,
            store_path.display()
        );
    }
    Ok(session)
}

/// Writes shell completions to stdout.
pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "buddynotes", &mut std::io::stdout());
    Ok(())
}
