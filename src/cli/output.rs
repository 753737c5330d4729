//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{IdentityKey, NoteList};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// All notes for one identity in dump output.
#[derive(Debug, Serialize)]
pub struct EntryListing<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick: Option<&'a str>,
    pub notes: &'a NoteList,
}

impl<'a> EntryListing<'a> {
    pub fn new(key: &'a IdentityKey, notes: &'a NoteList) -> Self {
        match key {
            IdentityKey::Durable {
                protocol,
                account,
                contact,
            } => Self {
                protocol: Some(protocol),
                account: Some(account),
                contact: Some(contact),
                nick: None,
                notes,
            },
            IdentityKey::Session { nick } => Self {
                protocol: None,
                account: None,
                contact: None,
                nick: Some(nick),
                notes,
            },
        }
    }
}

/// A configured contact.
#[derive(Debug, Serialize)]
pub struct ContactListing {
    pub nick: String,
    pub protocol: String,
    pub account: String,
    pub handle: String,
    pub connected: bool,
}
