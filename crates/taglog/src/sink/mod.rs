//! Destinations for resolved log lines.
//!
//! The facade resolves tag and message, then hands the result to a
//! [`LogSink`]. [`LogCrateSink`] forwards to the `log` crate and is what the
//! global logger uses; [`MemorySink`] keeps lines in memory.

mod memory;

pub use memory::{Entry, MemorySink};

use std::error::Error;
use std::fmt::Write as _;

use crate::facade::Severity;

/// Receives fully resolved log lines.
pub trait LogSink: Send + Sync {
    /// Records one line. `error` is `None` when the caller attached none.
    fn write(&self, severity: Severity, tag: &str, message: &str, error: Option<&dyn Error>);
}

impl<S: LogSink + ?Sized> LogSink for std::sync::Arc<S> {
    fn write(&self, severity: Severity, tag: &str, message: &str, error: Option<&dyn Error>) {
        (**self).write(severity, tag, message, error)
    }
}

/// Forwards lines to the `log` facade, using the tag as the record target.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn write(&self, severity: Severity, tag: &str, message: &str, error: Option<&dyn Error>) {
        let level = severity.to_level();
        match error {
            Some(error) => log::log!(target: tag, level, "{}\n{}", message, render_error(error)),
            None => log::log!(target: tag, level, "{}", message),
        }
    }
}

/// Renders an error and its `source()` chain, one cause per line.
pub fn render_error(error: &dyn Error) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        // Writing to a String cannot fail.
        let _ = write!(out, "\nCaused by: {cause}");
        source = cause.source();
    }
    out
}
