//! Isolated test environment with temp directory.

use super::{NotesCommand, TestContact};
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated test environment with a temporary config file and notes file.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// config file is rewritten whenever contacts or settings change.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Root of the environment
    root: PathBuf,
    settings: Vec<String>,
    contacts: Vec<TestContact>,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty config.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let env = Self {
            _temp_dir: temp_dir,
            root,
            settings: Vec::new(),
            contacts: Vec::new(),
        };
        env.write_config();
        env
    }

    /// Returns the path of the generated config file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Returns the path of the saved notes file.
    pub fn store_path(&self) -> PathBuf {
        self.root.join("notes.txt")
    }

    /// Adds a contact to the config file.
    pub fn add_contact(&mut self, contact: TestContact) -> &mut Self {
        self.contacts.push(contact);
        self.write_config();
        self
    }

    /// Adds a top-level `key = value` line to the config file.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.settings.push(format!("{} = {:?}", key, value));
        self.write_config();
        self
    }

    /// Writes raw text to the notes file.
    pub fn write_store(&self, blob: &str) {
        std::fs::write(self.store_path(), blob).expect("Failed to write notes file");
    }

    /// Reads the notes file, or `None` if nothing has been saved.
    pub fn read_store(&self) -> Option<String> {
        std::fs::read_to_string(self.store_path()).ok()
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .config(&self.config_path())
            .store(&self.store_path())
    }

    fn write_config(&self) {
        let mut text = String::new();
        for line in &self.settings {
            text.push_str(line);
            text.push('\n');
        }
        for contact in &self.contacts {
            text.push('\n');
            text.push_str(&contact.to_toml());
        }
        std::fs::write(self.config_path(), text).expect("Failed to write config file");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_env_writes_empty_config() {
        let env = TestEnv::new();
        assert!(env.config_path().exists());
        assert!(env.read_store().is_none());
    }

    #[test]
    fn add_contact_updates_config() {
        let mut env = TestEnv::new();
        env.add_contact(TestContact::new("alice"));
        let config = std::fs::read_to_string(env.config_path()).unwrap();
        assert!(config.contains("nick = \"alice\""));
    }

    #[test]
    fn settings_precede_contact_tables() {
        let mut env = TestEnv::new();
        env.add_contact(TestContact::new("alice"));
        env.set("addressing", "session");
        let config = std::fs::read_to_string(env.config_path()).unwrap();
        assert!(config.starts_with("addressing = \"session\"\n"));
    }
}
