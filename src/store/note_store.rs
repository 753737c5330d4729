//! The identity → notes mapping owned by a session.

use std::collections::HashMap;

use crate::domain::{IdentityKey, Note, NoteList};

/// All notes for one session, keyed by identity.
///
/// Every entry holds at least one note: storing an empty list removes the
/// entry instead. Lookups never create entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    entries: HashMap<IdentityKey, NoteList>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notes for `identity`, if it has any.
    pub fn lookup(&self, identity: &IdentityKey) -> Option<&NoteList> {
        self.entries.get(identity)
    }

    /// Inserts or overwrites the list for `identity`, returning the previous one.
    ///
    /// An empty `list` removes the entry.
    pub fn replace(&mut self, identity: IdentityKey, list: NoteList) -> Option<NoteList> {
        if list.is_empty() {
            self.entries.remove(&identity)
        } else {
            self.entries.insert(identity, list)
        }
    }

    /// Appends a single note to the list for `identity`, creating it if needed.
    pub fn append(&mut self, identity: IdentityKey, note: Note) {
        self.entries.entry(identity).or_default().push(note);
    }

    /// Removes the whole entry for `identity`.
    pub fn remove(&mut self, identity: &IdentityKey) -> Option<NoteList> {
        self.entries.remove(identity)
    }

    /// Iterates all entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&IdentityKey, &NoteList)> {
        self.entries.iter()
    }

    /// Returns all entries ordered by key.
    pub fn sorted_entries(&self) -> Vec<(&IdentityKey, &NoteList)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Number of identities with notes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of notes across all identities.
    pub fn note_count(&self) -> usize {
        self.entries.values().map(NoteList::len).sum()
    }
}
