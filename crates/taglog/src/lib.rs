//! Tagged logging facade with phase split timing.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`facade`] | `Logger`, `LoggerConfig`, `Severity`, `TagSource`, `CallSite`, macros |
//! | [`sink`] | `LogSink`, `LogCrateSink`, `MemorySink` |
//! | [`time`] | `SplitTimer`, `Clock` |
//! | [`logging`] | `env_logger` backend installation |
//!
//! # Quick start
//!
//! ```rust
//! use taglog::time::SplitTimer;
//!
//! taglog::logging::init_logging(taglog::logging::LoggingConfig::default());
//! taglog::set_enabled(true);
//!
//! taglog::info!(tag: "Startup", "config loaded from {}", "app.toml");
//!
//! let mut timings = SplitTimer::new("Startup", "boot");
//! timings.add_split("config");
//! timings.render_to_log();
//! ```

pub mod error;
pub mod facade;
pub mod logging;
pub mod sink;
pub mod time;

pub use error::ConfigError;
pub use facade::{
    CallSite, DEFAULT_TAG, Logger, LoggerConfig, LookupMode, Record, Severity, TagSource,
};
pub use sink::{LogCrateSink, LogSink, MemorySink};

use state::InitCell;

static GLOBAL: InitCell<Logger> = InitCell::new();

/// The process-wide logger used by the macros when no `logger:` is given.
///
/// Created on first use from [`LoggerConfig::default`], forwarding to the
/// `log` crate, unless [`set_global`] installed one before.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

/// Installs `logger` as the process-wide logger.
///
/// Returns `false`, dropping `logger`, if the global logger already exists.
pub fn set_global(logger: Logger) -> bool {
    let installed = GLOBAL.set(logger);
    if !installed {
        log::debug!(target: "taglog", "global logger already initialized; ignoring replacement");
    }
    installed
}

pub fn set_enabled(enabled: bool) {
    global().set_enabled(enabled);
}

pub fn is_enabled() -> bool {
    global().is_enabled()
}

pub fn set_lookup_disabled(disabled: bool) {
    global().set_lookup_disabled(disabled);
}

pub fn is_lookup_disabled() -> bool {
    global().is_lookup_disabled()
}

pub fn set_lookup_mode(mode: LookupMode) {
    global().set_lookup_mode(mode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_is_created_once() {
        let a = global() as *const Logger;
        let b = global() as *const Logger;
        assert_eq!(a, b);
        assert!(!set_global(Logger::default()));
    }

    #[test]
    fn static_setters_reach_global() {
        let before = global().config();

        set_lookup_mode(LookupMode::Full);
        assert_eq!(global().lookup_mode(), LookupMode::Full);
        set_lookup_disabled(true);
        assert!(is_lookup_disabled());
        set_enabled(true);
        assert!(is_enabled());

        global().apply(before);
    }
}
