//! Per-user notes session and its lifecycle hooks.
//!
//! A host integration creates one [`NotesSession`] when a user identifies,
//! hands it the previously saved blob, forwards `notes` commands to it, asks
//! it for a blob whenever the user's settings are saved, and ends it on
//! logout.

mod commands;

use log::info;
use serde::Deserialize;
use thiserror::Error;

pub use commands::{CommandHandler, CommandOutcome, IndexParsing, Subcommand};

use crate::host::{ContactResolver, MessageSink};
use crate::store::{AddressingMode, Codec, LineEncoding, LoadReport, NoteStore};

/// Fewest arguments `notes` accepts: the nick and the subcommand.
pub const MIN_COMMAND_ARGS: usize = 2;

/// Errors raised before a command reaches the handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("notes needs at least {required} arguments (nick, subcommand), got {given}")]
    TooFewArguments { required: usize, given: usize },
}

/// Behaviour switches for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    pub addressing: AddressingMode,
    pub encoding: LineEncoding,
    pub index_parsing: IndexParsing,
}

/// One user's notes plus the collaborators needed to serve them.
pub struct NotesSession<R, S> {
    resolver: R,
    sink: S,
    codec: Codec,
    index_parsing: IndexParsing,
    store: NoteStore,
}

impl<R: ContactResolver, S: MessageSink> NotesSession<R, S> {
    /// Starts a session with an empty store.
    pub fn start(resolver: R, sink: S, options: SessionOptions) -> Self {
        Self {
            resolver,
            sink,
            codec: Codec::new(options.addressing, options.encoding),
            index_parsing: options.index_parsing,
            store: NoteStore::new(),
        }
    }

    /// Replaces the store with the contents of a saved blob.
    ///
    /// `None` means nothing was saved and leaves an empty store.
    pub fn load(&mut self, blob: Option<&str>) -> LoadReport {
        let Some(blob) = blob else {
            self.store = NoteStore::new();
            return LoadReport::default();
        };
        let (store, report) = self.codec.deserialize(blob, &self.resolver);
        self.store = store;
        report
    }

    /// Serializes the store for the host to persist.
    pub fn save(&self) -> String {
        let blob = self.codec.serialize(&self.store);
        info!(
            "event=notes_save status=ok entries={} notes={} bytes={}",
            self.store.len(),
            self.store.note_count(),
            blob.len()
        );
        blob
    }

    /// Ends the session, discarding unsaved changes.
    pub fn end(self) {
        info!(
            "event=notes_session_end entries={} notes={}",
            self.store.len(),
            self.store.note_count()
        );
    }

    /// Runs `notes <nick> <subcommand> <rest...>`.
    pub fn execute<A: AsRef<str>>(&mut self, nick: &str, subcommand: &str, rest: &[A]) -> CommandOutcome {
        CommandHandler::new(
            &mut self.store,
            &self.resolver,
            &self.sink,
            self.codec.mode(),
            self.index_parsing,
        )
        .run(nick, subcommand, rest)
    }

    /// Runs a tokenized command line (without the leading `notes`).
    ///
    /// # Errors
    ///
    /// Returns `CommandError::TooFewArguments` when the nick or subcommand is
    /// missing; nothing is reported to the user in that case.
    pub fn dispatch<A: AsRef<str>>(&mut self, argv: &[A]) -> Result<CommandOutcome, CommandError> {
        match argv {
            [nick, subcommand, rest @ ..] => {
                Ok(self.execute(nick.as_ref(), subcommand.as_ref(), rest))
            }
            _ => Err(CommandError::TooFewArguments {
                required: MIN_COMMAND_ARGS,
                given: argv.len(),
            }),
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
