//! Notes command handler.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use super::open_session;
use crate::cli::NotesArgs;
use crate::cli::config::Config;
use crate::host::{MessageSink, StdoutSink};
use crate::infra::write_blob;
use crate::session::CommandOutcome;

/// Internal implementation that accepts any message sink.
///
/// Loads the saved notes, runs one command, and writes the notes back only
/// if the command changed them.
pub(crate) fn handle_notes_impl<S: MessageSink>(
    args: &NotesArgs,
    config: &Config,
    store_path: &Path,
    sink: S,
) -> Result<CommandOutcome> {
    let mut session = open_session(config, store_path, sink)?;

    let outcome = session.execute(&args.nick, &args.subcommand, &args.text);

    if outcome.mutated() {
        let blob = session.save();
        write_blob(store_path, &blob)
            .with_context(|| format!("failed to save notes to {}", store_path.display()))?;
        info!("event=store_write status=ok path={}", store_path.display());
    }
    session.end();

    Ok(outcome)
}

pub fn handle_notes(args: &NotesArgs, config: &Config, store_path: &Path) -> Result<()> {
    handle_notes_impl(args, config, store_path, StdoutSink)?;
    Ok(())
}
