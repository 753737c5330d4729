//! In-memory contact list used when no live daemon is attached.

use super::{Contact, ContactResolver};

/// A fixed set of contacts resolvable by nick.
///
/// Nicks compare ASCII case-insensitively, as IRC nicks do.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    contacts: Vec<Contact>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contact, replacing any existing contact with the same nick.
    pub fn insert(&mut self, contact: Contact) {
        self.contacts
            .retain(|c| !c.nick.eq_ignore_ascii_case(&contact.nick));
        self.contacts.push(contact);
    }

    /// Builder-style [`Roster::insert`].
    pub fn with(mut self, contact: Contact) -> Self {
        self.insert(contact);
        self
    }

    /// Removes the contact with `nick`, as when it disconnects.
    pub fn remove(&mut self, nick: &str) -> Option<Contact> {
        let pos = self
            .contacts
            .iter()
            .position(|c| c.nick.eq_ignore_ascii_case(nick))?;
        Some(self.contacts.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }
}

impl ContactResolver for Roster {
    fn resolve(&self, nick: &str) -> Option<Contact> {
        self.contacts
            .iter()
            .find(|c| c.nick.eq_ignore_ascii_case(nick))
            .cloned()
    }
}

impl FromIterator<Contact> for Roster {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for contact in iter {
            roster.insert(contact);
        }
        roster
    }
}
