//! Composite lookup key identifying whose notes a list holds.

use std::fmt;

/// Identifies the contact a set of notes belongs to.
///
/// `Durable` keys name the contact as seen by one account on one protocol and
/// survive restarts. `Session` keys name a contact by the nick it currently
/// has in the session; they are only meaningful while that contact is online.
///
/// Equality is exact and case-sensitive on every field, and the hash covers
/// every field.
///
/// # Examples
///
/// ```
/// use buddynotes::domain::IdentityKey;
///
/// let a = IdentityKey::durable("jabber", "me@example.com", "alice@example.com");
/// let b = IdentityKey::durable("msn", "me@example.com", "alice@example.com");
/// assert_ne!(a, b);
/// assert_eq!(a.contact(), "alice@example.com");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IdentityKey {
    Durable {
        protocol: String,
        account: String,
        contact: String,
    },
    Session {
        nick: String,
    },
}

impl IdentityKey {
    /// Creates a durable key, copying the three fields.
    pub fn durable(
        protocol: impl Into<String>,
        account: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self::Durable {
            protocol: protocol.into(),
            account: account.into(),
            contact: contact.into(),
        }
    }

    /// Creates a session-scoped key for a live nick.
    pub fn session(nick: impl Into<String>) -> Self {
        Self::Session { nick: nick.into() }
    }

    /// Returns the contact-side identifier: the contact handle for durable
    /// keys, the nick for session keys.
    pub fn contact(&self) -> &str {
        match self {
            Self::Durable { contact, .. } => contact,
            Self::Session { nick } => nick,
        }
    }

    /// Returns true if every field can be written as one non-blank line.
    ///
    /// A blank field would end its block early, and a line break would
    /// split it, so such keys are never stored.
    pub fn is_writable(&self) -> bool {
        fn line(field: &str) -> bool {
            !field.is_empty() && !field.contains(['\n', '\r'])
        }
        match self {
            Self::Durable {
                protocol,
                account,
                contact,
            } => line(protocol) && line(account) && line(contact),
            Self::Session { nick } => line(nick),
        }
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Durable {
                protocol,
                account,
                contact,
            } => write!(f, "{}:{}/{}", protocol, account, contact),
            Self::Session { nick } => write!(f, "{}", nick),
        }
    }
}

impl fmt::Debug for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityKey(\"{}\")", self)
    }
}
