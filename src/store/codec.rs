//! Line-oriented block format for persisting a [`NoteStore`].
//!
//! # Format
//!
//! A document is a sequence of blocks, each terminated by one blank line:
//!
//! ```text
//! me@example.com        <- account      (durable addressing only)
//! jabber                <- protocol     (durable addressing only)
//! alice@example.com     <- contact handle, or the nick in session addressing
//! lent her my copy of SICP
//! birthday is in march
//!
//! ```
//!
//! Blank lines outside a block are ignored, and end of input closes an open
//! block. Under [`LineEncoding::Verbatim`] lines are written as-is, so text
//! containing a line break cannot survive a round trip; [`LineEncoding::Escaped`]
//! backslash-escapes line breaks instead.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::NoteStore;
use crate::domain::{IdentityKey, Note, NoteList};
use crate::host::{Contact, ContactResolver};

/// How notes are keyed, and therefore how many metadata lines a block has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressingMode {
    /// Keyed by (protocol, account, contact handle); three metadata lines.
    #[default]
    Durable,
    /// Keyed by the contact's current nick; one metadata line. Blocks for
    /// contacts that are not online at load time are discarded.
    Session,
}

impl AddressingMode {
    /// Number of metadata lines that open a block.
    pub fn metadata_lines(self) -> usize {
        match self {
            Self::Durable => 3,
            Self::Session => 1,
        }
    }

    /// Builds the key for a live contact, or `None` if it is not fully known
    /// or its key could not be written back.
    pub fn identity_for(self, contact: &Contact) -> Option<IdentityKey> {
        let buddy = contact.established()?;
        let key = match self {
            Self::Durable => IdentityKey::durable(&buddy.protocol, &buddy.account, &buddy.handle),
            Self::Session => IdentityKey::session(&contact.nick),
        };
        if !key.is_writable() {
            warn!("event=identity_rejected reason=unwritable_key nick={}", contact.nick);
            return None;
        }
        Some(key)
    }
}

/// How individual lines are encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEncoding {
    /// Written exactly as given. Compatible with existing saved data.
    #[default]
    Verbatim,
    /// `\` becomes `\\`, line feed becomes `\n`, carriage return becomes `\r`.
    Escaped,
}

impl LineEncoding {
    pub fn encode(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Verbatim => Cow::Borrowed(text),
            Self::Escaped => {
                if !text.contains(['\\', '\n', '\r']) {
                    return Cow::Borrowed(text);
                }
                let mut out = String::with_capacity(text.len() + 8);
                for c in text.chars() {
                    match c {
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        other => out.push(other),
                    }
                }
                Cow::Owned(out)
            }
        }
    }

    /// Reverses [`LineEncoding::encode`]. Unknown escapes are kept as written.
    pub fn decode(self, line: &str) -> Cow<'_, str> {
        match self {
            Self::Verbatim => Cow::Borrowed(line),
            Self::Escaped => {
                if !line.contains('\\') {
                    return Cow::Borrowed(line);
                }
                let mut out = String::with_capacity(line.len());
                let mut chars = line.chars();
                while let Some(c) = chars.next() {
                    if c != '\\' {
                        out.push(c);
                        continue;
                    }
                    match chars.next() {
                        Some('\\') => out.push('\\'),
                        Some('n') => out.push('\n'),
                        Some('r') => out.push('\r'),
                        Some(other) => {
                            out.push('\\');
                            out.push(other);
                        }
                        None => out.push('\\'),
                    }
                }
                Cow::Owned(out)
            }
        }
    }
}

/// Counts from one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Blocks that contributed notes to the store.
    pub blocks_loaded: usize,
    /// Blocks discarded: incomplete metadata, or an unresolvable nick.
    pub blocks_dropped: usize,
    /// Notes added to the store.
    pub notes_loaded: usize,
}

/// Converts between a [`NoteStore`] and its persisted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    mode: AddressingMode,
    encoding: LineEncoding,
}

#[derive(Default)]
struct PendingBlock {
    metadata: Vec<String>,
    notes: NoteList,
}

impl Codec {
    pub fn new(mode: AddressingMode, encoding: LineEncoding) -> Self {
        Self { mode, encoding }
    }

    pub fn mode(&self) -> AddressingMode {
        self.mode
    }

    pub fn encoding(&self) -> LineEncoding {
        self.encoding
    }

    /// Writes every entry as a block, in key order. An empty store yields an
    /// empty string; otherwise the document ends with a blank line.
    ///
    /// Entries whose key is not [writable](IdentityKey::is_writable) are
    /// skipped with a warning.
    pub fn serialize(&self, store: &NoteStore) -> String {
        let mut out = String::new();
        for (key, notes) in store.sorted_entries() {
            if !key.is_writable() {
                warn!(
                    "event=notes_encode status=skipped reason=unwritable_key notes={}",
                    notes.len()
                );
                continue;
            }
            match key {
                IdentityKey::Durable {
                    protocol,
                    account,
                    contact,
                } => {
                    self.push_line(&mut out, account);
                    self.push_line(&mut out, protocol);
                    self.push_line(&mut out, contact);
                }
                IdentityKey::Session { nick } => self.push_line(&mut out, nick),
            }
            for note in notes {
                self.push_line(&mut out, note.as_str());
            }
            out.push('\n');
        }
        out
    }

    fn push_line(&self, out: &mut String, text: &str) {
        out.push_str(&self.encoding.encode(text));
        out.push('\n');
    }

    /// Parses a document into a fresh store.
    ///
    /// Malformed blocks are skipped rather than failing the load. In session
    /// addressing each block's nick is resolved through `resolver`; in durable
    /// addressing the resolver is not consulted.
    pub fn deserialize<R: ContactResolver>(&self, blob: &str, resolver: &R) -> (NoteStore, LoadReport) {
        let mut store = NoteStore::new();
        let mut report = LoadReport::default();
        let mut pending = PendingBlock::default();
        let needed = self.mode.metadata_lines();

        for line in blob.split('\n') {
            if line.is_empty() {
                if pending.metadata.is_empty() {
                    continue;
                }
                self.close_block(std::mem::take(&mut pending), resolver, &mut store, &mut report);
            } else if pending.metadata.len() < needed {
                pending.metadata.push(self.encoding.decode(line).into_owned());
            } else if let Ok(note) = Note::new(self.encoding.decode(line)) {
                pending.notes.push(note);
            }
        }
        if !pending.metadata.is_empty() {
            self.close_block(pending, resolver, &mut store, &mut report);
        }

        info!(
            "event=notes_decode status=ok blocks={} dropped={} notes={}",
            report.blocks_loaded, report.blocks_dropped, report.notes_loaded
        );
        (store, report)
    }

    fn close_block<R: ContactResolver>(
        &self,
        block: PendingBlock,
        resolver: &R,
        store: &mut NoteStore,
        report: &mut LoadReport,
    ) {
        let Some(key) = self.block_identity(&block.metadata, resolver) else {
            report.blocks_dropped += 1;
            return;
        };
        if block.notes.is_empty() {
            debug!("event=notes_block status=empty contact={}", key.contact());
            return;
        }

        debug!("event=notes_block status=loaded contact={}", key.contact());
        report.blocks_loaded += 1;
        report.notes_loaded += block.notes.len();
        let mut list = store.remove(&key).unwrap_or_default();
        list.extend(block.notes);
        store.replace(key, list);
    }

    fn block_identity<R: ContactResolver>(
        &self,
        metadata: &[String],
        resolver: &R,
    ) -> Option<IdentityKey> {
        match (self.mode, metadata) {
            (AddressingMode::Durable, [account, protocol, contact]) => {
                Some(IdentityKey::durable(protocol, account, contact))
            }
            (AddressingMode::Session, [nick]) => {
                let key = resolver
                    .resolve(nick)
                    .and_then(|contact| self.mode.identity_for(&contact));
                if key.is_none() {
                    warn!("event=notes_block status=dropped reason=offline nick={}", nick);
                }
                key
            }
            _ => {
                warn!(
                    "event=notes_block status=dropped reason=incomplete_metadata lines={}",
                    metadata.len()
                );
                None
            }
        }
    }
}
