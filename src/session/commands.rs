//! The `notes <nick> add|list|del` command.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{IdentityKey, Note};
use crate::host::{ContactResolver, MessageSink};
use crate::store::{AddressingMode, NoteStore};

/// How the index argument of `del` is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexParsing {
    /// Only a non-negative base-10 integer is accepted.
    #[default]
    Strict,
    /// C `atoi` rules: leading whitespace, optional sign, leading digits.
    /// Anything unparsable counts as 0.
    Lenient,
}

impl IndexParsing {
    /// Parses an index, or `None` if strict parsing rejects it.
    pub fn parse(self, text: &str) -> Option<i64> {
        match self {
            Self::Strict => text.trim().parse::<i64>().ok().filter(|n| *n >= 0),
            Self::Lenient => Some(atoi(text)),
        }
    }
}

fn atoi(text: &str) -> i64 {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative { -value } else { value }
}

/// The subcommands `notes` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Add,
    List,
    Del,
}

impl Subcommand {
    /// Matches a subcommand token, ignoring ASCII case.
    pub fn parse(token: &str) -> Option<Self> {
        [("add", Self::Add), ("list", Self::List), ("del", Self::Del)]
            .into_iter()
            .find(|(name, _)| token.eq_ignore_ascii_case(name))
            .map(|(_, sub)| sub)
    }
}

/// What a command did. Every outcome has already been reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    UnknownNick,
    Added,
    EmptyNote,
    Listed { count: usize },
    Deleted { index: usize, note: Note },
    NothingToDelete,
    IndexOutOfRange { len: usize },
    InvalidIndex,
    InvalidSubcommand,
}

impl CommandOutcome {
    /// Whether the store changed.
    pub fn mutated(&self) -> bool {
        matches!(self, Self::Added | Self::Deleted { .. })
    }
}

/// Runs one `notes` command against a store.
pub struct CommandHandler<'a, R, S> {
    store: &'a mut NoteStore,
    resolver: &'a R,
    sink: &'a S,
    mode: AddressingMode,
    index_parsing: IndexParsing,
}

impl<'a, R: ContactResolver, S: MessageSink> CommandHandler<'a, R, S> {
    pub fn new(
        store: &'a mut NoteStore,
        resolver: &'a R,
        sink: &'a S,
        mode: AddressingMode,
        index_parsing: IndexParsing,
    ) -> Self {
        Self {
            store,
            resolver,
            sink,
            mode,
            index_parsing,
        }
    }

    /// Executes `notes <nick> <subcommand> <rest...>`.
    ///
    /// `rest` is re-joined with single spaces: it is the note text for `add`
    /// and the index for `del`.
    pub fn run<A: AsRef<str>>(&mut self, nick: &str, subcommand: &str, rest: &[A]) -> CommandOutcome {
        let identity = self
            .resolver
            .resolve(nick)
            .and_then(|contact| self.mode.identity_for(&contact));
        let Some(identity) = identity else {
            self.sink.emit(&format!("Nick `{}' does not exist", nick));
            return CommandOutcome::UnknownNick;
        };

        let text = rest.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");

        match Subcommand::parse(subcommand) {
            Some(Subcommand::Add) => {
                let Ok(note) = Note::new(text) else {
                    self.sink.emit("Cannot add empty note.");
                    return CommandOutcome::EmptyNote;
                };
                debug!("event=note_add contact={}", identity.contact());
                self.store.append(identity, note);
                self.sink.emit(&format!("Added note for {}.", nick));
                CommandOutcome::Added
            }
            Some(Subcommand::List) => match self.store.lookup(&identity) {
                Some(notes) if !notes.is_empty() => {
                    self.sink.emit(&format!("Your notes for {}:", nick));
                    for (i, note) in notes.iter().enumerate() {
                        self.sink.emit(&format!("{}. {}", i, note));
                    }
                    CommandOutcome::Listed { count: notes.len() }
                }
                _ => {
                    self.sink.emit(&format!("No notes set for {}.", nick));
                    CommandOutcome::Listed { count: 0 }
                }
            },
            Some(Subcommand::Del) => self.delete(identity, nick, &text),
            None => {
                self.sink
                    .emit(&format!("Invalid subcommand for notes: {}.", subcommand));
                CommandOutcome::InvalidSubcommand
            }
        }
    }

    fn delete(
        &mut self,
        identity: IdentityKey,
        nick: &str,
        text: &str,
    ) -> CommandOutcome {
        let Some(n) = self.index_parsing.parse(text) else {
            self.sink
                .emit(&format!("Invalid note index `{}' for {}.", text, nick));
            return CommandOutcome::InvalidIndex;
        };

        let mut notes = self.store.lookup(&identity).cloned().unwrap_or_default();
        let len = notes.len();
        let removed = usize::try_from(n)
            .ok()
            .and_then(|index| notes.remove(index).map(|note| (index, note)));

        match removed {
            Some((index, note)) => {
                debug!("event=note_del contact={} index={}", identity.contact(), index);
                self.store.replace(identity, notes);
                self.sink
                    .emit(&format!("Deleted note {} for {}.", index, nick));
                CommandOutcome::Deleted { index, note }
            }
            None if len == 0 => {
                self.sink
                    .emit(&format!("There are no notes to delete for {}.", nick));
                CommandOutcome::NothingToDelete
            }
            None => {
                self.sink
                    .emit(&format!("There are only {} notes for {}.", len, nick));
                CommandOutcome::IndexOutOfRange { len }
            }
        }
    }
}
