//! Dump command handler.

use anyhow::Result;
use std::path::Path;

use super::open_session;
use crate::cli::DumpArgs;
use crate::cli::config::Config;
use crate::cli::output::{EntryListing, Output, OutputFormat};
use crate::host::StdoutSink;
use crate::store::NoteStore;

pub fn handle_dump(args: &DumpArgs, config: &Config, store_path: &Path) -> Result<()> {
    let session = open_session(config, store_path, StdoutSink)?;
    let store = session.store();

    match args.format {
        OutputFormat::Human => {
            for line in format_dump(store) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            let output = Output::new(dump_listings(store));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    session.end();
    Ok(())
}

/// Renders every entry as a header line followed by its numbered notes.
pub(crate) fn format_dump(store: &NoteStore) -> Vec<String> {
    if store.is_empty() {
        return vec!["No notes saved.".to_string()];
    }

    let mut lines = Vec::new();
    for (key, notes) in store.sorted_entries() {
        lines.push(key.to_string());
        for (i, note) in notes.iter().enumerate() {
            lines.push(format!("  {}. {}", i, note));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "{} contact(s), {} note(s)",
        store.len(),
        store.note_count()
    ));
    lines
}

pub(crate) fn dump_listings(store: &NoteStore) -> Vec<EntryListing<'_>> {
    store
        .sorted_entries()
        .into_iter()
        .map(|(key, notes)| EntryListing::new(key, notes))
        .collect()
}
