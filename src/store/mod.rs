//! Note storage: the in-memory map and its persisted text form.

mod codec;
mod note_store;

pub use codec::{AddressingMode, Codec, LineEncoding, LoadReport};
pub use note_store::NoteStore;
