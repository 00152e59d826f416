use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{render_error, LogSink};
use crate::facade::Severity;

/// One line recorded by a [`MemorySink`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Entry {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
    /// Rendered error (see [`render_error`]), if one was attached.
    pub error: Option<String>,
}

/// Sink that keeps every line in memory.
///
/// Clones share the same buffer, so one handle can be given to a
/// [`Logger`](crate::Logger) while another inspects what was written.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        // Entries are plain data; a panic while holding the lock cannot leave them torn.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the recorded lines, oldest first.
    pub fn entries(&self) -> Vec<Entry> {
        self.lock().clone()
    }

    /// Recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns every recorded line.
    pub fn take(&self) -> Vec<Entry> {
        std::mem::take(&mut *self.lock())
    }
}

impl LogSink for MemorySink {
    fn write(&self, severity: Severity, tag: &str, message: &str, error: Option<&dyn Error>) {
        let entry = Entry {
            severity,
            tag: tag.to_owned(),
            message: message.to_owned(),
            error: error.map(render_error),
        };
        self.lock().push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.write(Severity::Debug, "Tag", "hello", None);

        assert_eq!(handle.len(), 1);
        let entry = &handle.entries()[0];
        assert_eq!(entry.severity, Severity::Debug);
        assert_eq!(entry.tag, "Tag");
        assert_eq!(entry.message, "hello");
        assert_eq!(entry.error, None);
    }

    #[test]
    fn error_is_rendered() {
        let sink = MemorySink::new();
        let err = std::io::Error::other("boom");
        sink.write(Severity::Error, "Io", "read failed", Some(&err));
        assert_eq!(sink.entries()[0].error.as_deref(), Some("boom"));
    }

    #[test]
    fn take_drains() {
        let sink = MemorySink::new();
        sink.write(Severity::Info, "A", "one", None);
        sink.write(Severity::Info, "A", "two", None);
        let drained = sink.take();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }
}
