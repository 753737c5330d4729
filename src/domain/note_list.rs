//! Ordered, index-addressable notes for one identity.

use super::Note;
use serde::Serialize;

/// The notes attached to a single identity, in insertion order.
///
/// Indices are positional: removing a note shifts every later note down by
/// one, so an index is only meaningful against the list as it is right now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NoteList(Vec<Note>);

impl NoteList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a note at the end.
    pub fn push(&mut self, note: Note) {
        self.0.push(note);
    }

    /// Removes and returns the note at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Note> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Returns the note at `index`.
    pub fn get(&self, index: usize) -> Option<&Note> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.0.iter()
    }

    /// Appends every note of `other`, keeping its order.
    pub fn extend(&mut self, other: NoteList) {
        self.0.extend(other.0);
    }
}

impl FromIterator<Note> for NoteList {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for NoteList {
    type Item = Note;
    type IntoIter = std::vec::IntoIter<Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(texts: &[&str]) -> NoteList {
        texts.iter().map(|t| Note::new(*t).unwrap()).collect()
    }

    fn texts(list: &NoteList) -> Vec<&str> {
        list.iter().map(Note::as_str).collect()
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut notes = NoteList::new();
        notes.push(Note::new("first").unwrap());
        notes.push(Note::new("second").unwrap());
        assert_eq!(texts(&notes), vec!["first", "second"]);
    }

    #[test]
    fn remove_shifts_later_indices_down() {
        let mut notes = list(&["a", "b", "c"]);

        let removed = notes.remove(1).unwrap();
        assert_eq!(removed.as_str(), "b");
        assert_eq!(texts(&notes), vec!["a", "c"]);

        notes.remove(1);
        assert_eq!(texts(&notes), vec!["a"]);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut notes = list(&["a", "b"]);
        assert!(notes.remove(2).is_none());
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn get_by_index() {
        let notes = list(&["a", "b"]);
        assert_eq!(notes.get(1).map(Note::as_str), Some("b"));
        assert!(notes.get(2).is_none());
    }

    #[test]
    fn extend_appends_in_order() {
        let mut notes = list(&["a"]);
        notes.extend(list(&["b", "c"]));
        assert_eq!(texts(&notes), vec!["a", "b", "c"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let notes = list(&["x", "y"]);
        assert_eq!(serde_json::to_string(&notes).unwrap(), r#"["x","y"]"#);
    }
}
