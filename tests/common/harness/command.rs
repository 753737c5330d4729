//! Fluent wrapper around assert_cmd::Command.

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `buddynotes` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NotesCommand {
    args: Vec<String>,
}

impl NotesCommand {
    /// Creates a new command for the `buddynotes` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--config` option.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Sets the `--store` option.
    pub fn store(mut self, path: &Path) -> Self {
        self.args.push("--store".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("buddynotes").expect("Failed to find buddynotes binary");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for `notes <nick> <subcommand> [words...]`.
    pub fn notes(self, nick: &str, subcommand: &str, words: &[&str]) -> Self {
        self.args(["notes", nick, subcommand]).args(words)
    }

    /// Configures for `notes <nick> add <words...>`.
    pub fn add(self, nick: &str, words: &[&str]) -> Self {
        self.notes(nick, "add", words)
    }

    /// Configures for `notes <nick> list`.
    pub fn list(self, nick: &str) -> Self {
        self.notes(nick, "list", &[])
    }

    /// Configures for `notes <nick> del <index>`.
    pub fn del(self, nick: &str, index: &str) -> Self {
        self.notes(nick, "del", &[index])
    }

    /// Configures for the `dump` command.
    pub fn dump(self) -> Self {
        self.args(["dump"])
    }

    /// Configures for the `contacts` command.
    pub fn contacts(self) -> Self {
        self.args(["contacts"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        NotesCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_output_success() {
        let output = NotesCommand::new().args(["--help"]).output_success();
        assert!(output.contains("buddynotes") || output.contains("notes"));
    }

    #[test]
    fn test_command_with_store_and_config() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "").unwrap();

        NotesCommand::new()
            .config(&config)
            .store(&temp.path().join("notes.txt"))
            .dump()
            .assert()
            .success()
            .stdout("No notes saved.\n");
    }
}
