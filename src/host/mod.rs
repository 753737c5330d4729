//! Narrow interfaces to the hosting chat daemon.
//!
//! The notes engine never talks to the daemon directly. It is handed a
//! [`ContactResolver`] to turn nicks into contacts and a [`MessageSink`] to
//! send feedback lines back to the user.

mod roster;

use std::cell::RefCell;

pub use roster::Roster;

/// The account-side identity behind a nick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buddy {
    /// Protocol name, e.g. `jabber`.
    pub protocol: String,
    /// The local account the contact is reached through.
    pub account: String,
    /// The contact's handle on that protocol.
    pub handle: String,
}

impl Buddy {
    pub fn new(
        protocol: impl Into<String>,
        account: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            account: account.into(),
            handle: handle.into(),
        }
    }
}

/// A contact visible in the session under a nick.
///
/// A contact without a `buddy` is only partially known (the nick exists but
/// its backing account is not established) and cannot carry notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub nick: String,
    pub buddy: Option<Buddy>,
}

impl Contact {
    /// Creates a fully known contact.
    pub fn new(nick: impl Into<String>, buddy: Buddy) -> Self {
        Self {
            nick: nick.into(),
            buddy: Some(buddy),
        }
    }

    /// Creates a contact whose backing account is not established.
    pub fn without_buddy(nick: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            buddy: None,
        }
    }

    /// Returns the buddy if the contact is fully known.
    pub fn established(&self) -> Option<&Buddy> {
        self.buddy.as_ref()
    }
}

/// Maps a display name to a live contact.
pub trait ContactResolver {
    fn resolve(&self, nick: &str) -> Option<Contact>;
}

impl<T: ContactResolver + ?Sized> ContactResolver for &T {
    fn resolve(&self, nick: &str) -> Option<Contact> {
        (**self).resolve(nick)
    }
}

/// Delivers one line of feedback to the user.
pub trait MessageSink {
    fn emit(&self, line: &str);
}

impl<T: MessageSink + ?Sized> MessageSink for &T {
    fn emit(&self, line: &str) {
        (**self).emit(line)
    }
}

/// Sink that prints each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

/// Sink that records every line it receives.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns and clears the recorded lines.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl MessageSink for Transcript {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
