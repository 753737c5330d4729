//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::host::{Buddy, Contact, Roster};
use crate::session::SessionOptions;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Saved notes file
    pub store: Option<PathBuf>,

    /// Addressing, encoding and index parsing
    #[serde(flatten)]
    pub options: SessionOptions,

    /// Contacts that notes can be attached to
    #[serde(default)]
    pub contacts: Vec<ContactEntry>,
}

/// One `[[contacts]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactEntry {
    pub nick: String,
    pub protocol: String,
    pub account: String,
    pub handle: String,

    /// Whether the contact's account is established; offline contacts
    /// resolve by nick but cannot carry notes.
    #[serde(default = "default_connected")]
    pub connected: bool,
}

fn default_connected() -> bool {
    true
}

impl ContactEntry {
    pub fn to_contact(&self) -> Contact {
        if self.connected {
            Contact::new(
                &self.nick,
                Buddy::new(&self.protocol, &self.account, &self.handle),
            )
        } else {
            Contact::without_buddy(&self.nick)
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/buddynotes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("buddynotes")
            .join("config.toml")
    }

    /// Resolve the saved notes file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--store` argument
    /// 2. Config file `store` setting
    /// 3. `<data dir>/buddynotes/notes.txt`
    pub fn store_path(&self, cli_store: Option<&PathBuf>) -> PathBuf {
        cli_store
            .cloned()
            .or_else(|| self.store.clone())
            .unwrap_or_else(|| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("buddynotes")
                    .join("notes.txt")
            })
    }

    /// Builds the contact roster from the `[[contacts]]` tables.
    pub fn roster(&self) -> Roster {
        self.contacts.iter().map(ContactEntry::to_contact).collect()
    }
}
