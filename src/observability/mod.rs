//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile → <data dir>/spotfinder.log
//! ```
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` configuration option
//! 3. Default: `"info"`
//!
//! Log files rotate at 10 MB and three backups are retained.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFile;
pub use init::{init_tracing, LOG_FILE_NAME};
