//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments with a generated config file and
//! CLI assertion helpers using `assert_cmd`.

mod command;
mod contact;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::NotesCommand;
#[allow(unused_imports)]
pub use contact::TestContact;
#[allow(unused_imports)]
pub use env::TestEnv;
