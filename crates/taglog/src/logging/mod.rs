//! Logging backend.
//!
//! The facade forwards to the standard `log` crate by default. This module
//! installs `env_logger` as that backend, printing lines in logcat style
//! (`D/Tag: message`). Applications with their own `log` backend can skip it.

mod init;

pub use init::{format_line, init_logging, LoggingConfig};
