//! A single free-text note attached to a contact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A non-empty line of free text.
///
/// Empty notes are rejected at construction: in the persisted block format a
/// blank line terminates a block, so an empty note could never be read back.
///
/// # Examples
///
/// ```
/// use buddynotes::domain::Note;
///
/// let note = Note::new("owes me lunch").unwrap();
/// assert_eq!(note.as_str(), "owes me lunch");
///
/// assert!(Note::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Note(String);

/// Error returned when constructing a note from empty text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("note text cannot be empty")]
pub struct ParseNoteError;

impl Note {
    /// Creates a note from text, copying it.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the text is empty.
    pub fn new(text: impl Into<String>) -> Result<Self, ParseNoteError> {
        let text = text.into();
        if text.is_empty() {
            return Err(ParseNoteError);
        }
        Ok(Self(text))
    }

    /// Returns the note text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Note({:?})", self.0)
    }
}

impl FromStr for Note {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
