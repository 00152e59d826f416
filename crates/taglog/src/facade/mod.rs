//! The logging facade.
//!
//! A [`Logger`] owns its settings and a [`LogSink`]. Every call resolves a
//! tag, prefixes the message with the call site when lookup is enabled, and
//! forwards the result to the sink. A disabled logger returns before any
//! formatting happens.
//!
//! Most code logs through the macros (`debug!`, `warn!`, ...), which target
//! the process-wide logger unless given `logger: ...`.

mod config;
mod macros;
mod severity;
mod site;
mod tag;

pub use config::{parse_flag, LoggerConfig, LookupMode, ENV_ENABLED, ENV_LOOKUP};
pub use severity::Severity;
pub use site::CallSite;
pub use tag::{simple_type_name, TagSource};

use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::sink::{LogCrateSink, LogSink};

/// Tag used when none can be derived.
pub const DEFAULT_TAG: &str = "Logger";

/// One structured log call.
pub struct Record<'a> {
    pub severity: Severity,
    pub tag: TagSource<'a>,
    pub error: Option<&'a dyn Error>,
    pub site: CallSite,
    pub args: fmt::Arguments<'a>,
}

/// Logging facade instance.
///
/// Flags are individually atomic. Writes are serialized so that
/// [`Logger::apply`] never interleaves with another setter; reads are relaxed
/// and may observe a slightly stale value.
pub struct Logger {
    enabled: AtomicBool,
    lookup_disabled: AtomicBool,
    lookup_mode: AtomicU8,
    write_lock: Mutex<()>,
    sink: Box<dyn LogSink>,
}

impl Logger {
    pub fn new(config: LoggerConfig, sink: impl LogSink + 'static) -> Self {
        Self {
            enabled: AtomicBool::new(config.enabled),
            lookup_disabled: AtomicBool::new(config.lookup_disabled),
            lookup_mode: AtomicU8::new(config.lookup_mode.to_u8()),
            write_lock: Mutex::new(()),
            sink: Box::new(sink),
        }
    }

    /// Logger forwarding to the `log` crate.
    pub fn with_log_crate(config: LoggerConfig) -> Self {
        Self::new(config, LogCrateSink)
    }

    // ── settings ──────────────────────────────────────────────────────────

    fn write_with<F: FnOnce(&Self)>(&self, f: F) {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        f(self);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.write_with(|l| l.enabled.store(enabled, Ordering::Relaxed));
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_lookup_disabled(&self, disabled: bool) {
        self.write_with(|l| l.lookup_disabled.store(disabled, Ordering::Relaxed));
    }

    #[inline]
    pub fn is_lookup_disabled(&self) -> bool {
        self.lookup_disabled.load(Ordering::Relaxed)
    }

    pub fn set_lookup_mode(&self, mode: LookupMode) {
        self.write_with(|l| l.lookup_mode.store(mode.to_u8(), Ordering::Relaxed));
    }

    #[inline]
    pub fn lookup_mode(&self) -> LookupMode {
        LookupMode::from_u8(self.lookup_mode.load(Ordering::Relaxed))
    }

    /// Replaces all settings at once.
    pub fn apply(&self, config: LoggerConfig) {
        self.write_with(|l| {
            l.enabled.store(config.enabled, Ordering::Relaxed);
            l.lookup_disabled.store(config.lookup_disabled, Ordering::Relaxed);
            l.lookup_mode.store(config.lookup_mode.to_u8(), Ordering::Relaxed);
        });
    }

    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            enabled: self.is_enabled(),
            lookup_disabled: self.is_lookup_disabled(),
            lookup_mode: self.lookup_mode(),
        }
    }

    // ── logging ───────────────────────────────────────────────────────────

    /// Logs one line. Entry point for callers not using the macros.
    ///
    /// The call site is the caller's file and line; the enclosing function is
    /// unknown, so absent tags fall back to [`DEFAULT_TAG`].
    #[track_caller]
    pub fn log<'a>(
        &self,
        severity: Severity,
        tag: impl Into<TagSource<'a>>,
        args: fmt::Arguments<'_>,
        error: Option<&dyn Error>,
    ) {
        if !self.is_enabled() {
            return;
        }
        let site = CallSite::caller();
        self.emit(&Record { severity, tag: tag.into(), error, site, args });
    }

    /// Resolves and dispatches a record. No-op when disabled.
    pub fn emit(&self, record: &Record<'_>) {
        if !self.is_enabled() {
            return;
        }
        let tag = self.resolve_tag(&record.tag, &record.site);
        let message = self.resolve_message(record.args, &record.site);
        self.dispatch(record.severity, &tag, &message, record.error);
    }

    /// Derives the tag for a call.
    pub fn resolve_tag<'a>(&self, source: &TagSource<'a>, site: &CallSite) -> Cow<'a, str> {
        match *source {
            TagSource::Literal(tag) => Cow::Borrowed(tag),
            TagSource::Type(name) => Cow::Borrowed(simple_type_name(name)),
            TagSource::Lookup if self.is_lookup_disabled() => Cow::Borrowed(DEFAULT_TAG),
            TagSource::Lookup => Cow::Borrowed(site.owner().unwrap_or(DEFAULT_TAG)),
        }
    }

    /// Formats the message and prefixes it with the call site when lookup is on.
    pub fn resolve_message(&self, args: fmt::Arguments<'_>, site: &CallSite) -> String {
        let body: Cow<'_, str> = match args.as_str() {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Owned(args.to_string()),
        };

        let prefix = self.location_prefix(site);
        if prefix.is_empty() {
            body.into_owned()
        } else {
            format!("{prefix} {body}")
        }
    }

    /// `(file:line)` or `[(file:line)#method]`; empty when lookup is disabled.
    pub fn location_prefix(&self, site: &CallSite) -> String {
        if self.is_lookup_disabled() {
            return String::new();
        }
        let file = site.file_name();
        let line = site.line();
        match (self.lookup_mode(), site.method()) {
            (LookupMode::Short, _) => format!("({file}:{line})"),
            (LookupMode::Full, Some(method)) => format!("[({file}:{line})#{method}]"),
            (LookupMode::Full, None) => format!("[({file}:{line})]"),
        }
    }

    /// Hands a resolved line to the sink.
    pub fn dispatch(&self, severity: Severity, tag: &str, message: &str, error: Option<&dyn Error>) {
        self.sink.write(severity, tag, message, error);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::with_log_crate(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("config", &self.config()).finish_non_exhaustive()
    }
}
