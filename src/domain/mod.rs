//! Core types: Note, NoteList, IdentityKey

mod identity;
mod note;
mod note_list;

pub use identity::IdentityKey;
pub use note::{Note, ParseNoteError};
pub use note_list::NoteList;
