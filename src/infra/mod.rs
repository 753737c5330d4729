//! Infrastructure: blob file I/O and logging setup

mod fs;
mod logging;

pub use fs::{FsError, read_blob, write_blob};
pub use logging::{LoggingError, init_logging, level_for_verbosity};
