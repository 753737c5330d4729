//! Process-wide logging bootstrap for the binary.
//!
//! Library code only uses the `log` facade; this module wires it to a
//! `flexi_logger` backend writing to stderr. Initialization happens at most
//! once per process.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;
use thiserror::Error;

static LOGGER: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _handle: LoggerHandle,
}

/// Errors from logging setup.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to start logger: {0}")]
    Backend(#[from] FlexiLoggerError),

    #[error("logging already initialized with level `{current}`; refusing to switch to `{requested}`")]
    AlreadyInitialized {
        current: &'static str,
        requested: &'static str,
    },
}

/// Maps a `-v` count to a log level.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Starts logging to stderr at the level implied by `verbosity`.
///
/// `RUST_LOG`, when set, takes precedence over the verbosity level. Calling
/// again with the same verbosity is a no-op.
///
/// # Errors
///
/// Returns `LoggingError::AlreadyInitialized` on a second call with a
/// different level, or `LoggingError::Backend` if the logger cannot start.
pub fn init_logging(verbosity: u8) -> Result<(), LoggingError> {
    let level = level_for_verbosity(verbosity);

    let state = LOGGER.get_or_try_init(|| -> Result<LoggingState, LoggingError> {
        let handle = Logger::try_with_env_or_str(level)?
            .format(flexi_logger::default_format)
            .start()?;
        info!(
            "event=logging_init status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );
        Ok(LoggingState {
            level,
            _handle: handle,
        })
    })?;

    if state.level != level {
        return Err(LoggingError::AlreadyInitialized {
            current: state.level,
            requested: level,
        });
    }
    Ok(())
}
