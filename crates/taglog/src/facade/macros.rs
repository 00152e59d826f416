//! Leveled logging macros.
//!
//! ```rust
//! use taglog::{debug, warn, Logger, LoggerConfig, MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(LoggerConfig { enabled: true, ..LoggerConfig::default() }, sink.clone());
//!
//! debug!(logger: &logger, tag: "Net", "connected to {}", "10.0.0.1");
//! let err = std::io::Error::other("reset by peer");
//! warn!(logger: &logger, tag: "Net", err: err, "connection dropped");
//!
//! assert_eq!(sink.len(), 2);
//! ```
//!
//! Optional leading keys, in this order:
//!
//! | key | value | default |
//! |-----|-------|---------|
//! | `logger:` | `&Logger` | [`global()`](crate::global) |
//! | `tag:` | anything `Into<TagSource>` | derived from the call site |
//! | `of:` | any value; its type names the tag | |
//! | `err:` | a value implementing `std::error::Error` | none |
//!
//! Arguments are evaluated only when the logger is enabled.

/// Logs at the given [`Severity`](crate::Severity).
#[macro_export]
macro_rules! log_at {
    // logger
    (@logger $sev:expr; logger: $logger:expr, $($rest:tt)+) => {
        $crate::log_at!(@tag $sev; $logger; $($rest)+)
    };
    (@logger $sev:expr; $($rest:tt)+) => {
        $crate::log_at!(@tag $sev; $crate::global(); $($rest)+)
    };

    // tag
    (@tag $sev:expr; $logger:expr; tag: $tag:expr, $($rest:tt)+) => {
        $crate::log_at!(@err $sev; $logger; $crate::TagSource::from($tag); $($rest)+)
    };
    (@tag $sev:expr; $logger:expr; of: $obj:expr, $($rest:tt)+) => {
        $crate::log_at!(@err $sev; $logger; $crate::TagSource::of(&$obj); $($rest)+)
    };
    (@tag $sev:expr; $logger:expr; $($rest:tt)+) => {
        $crate::log_at!(@err $sev; $logger; $crate::TagSource::Lookup; $($rest)+)
    };

    // error
    (@err $sev:expr; $logger:expr; $tag:expr; err: $err:expr, $($arg:tt)+) => {
        $crate::log_at!(@emit $sev; $logger; $tag;
            ::core::option::Option::Some(&$err as &dyn ::std::error::Error); $($arg)+)
    };
    (@err $sev:expr; $logger:expr; $tag:expr; $($arg:tt)+) => {
        $crate::log_at!(@emit $sev; $logger; $tag; ::core::option::Option::None; $($arg)+)
    };

    (@emit $sev:expr; $logger:expr; $tag:expr; $err:expr; $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        if logger.is_enabled() {
            logger.emit(&$crate::Record {
                severity: $sev,
                tag: $tag,
                error: $err,
                site: $crate::call_site!(),
                args: ::core::format_args!($($arg)+),
            });
        }
    }};

    ($sev:expr, $($rest:tt)+) => {
        $crate::log_at!(@logger $sev; $($rest)+)
    };
}

/// Logs at [`Severity::Verbose`](crate::Severity::Verbose).
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)+) => { $crate::log_at!($crate::Severity::Verbose, $($arg)+) };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log_at!($crate::Severity::Debug, $($arg)+) };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log_at!($crate::Severity::Info, $($arg)+) };
}

/// Logs at [`Severity::Warn`](crate::Severity::Warn).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::log_at!($crate::Severity::Warn, $($arg)+) };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log_at!($crate::Severity::Error, $($arg)+) };
}

/// Logs a should-never-happen condition at [`Severity::Assert`](crate::Severity::Assert).
///
/// Only logs; it does not panic.
#[macro_export]
macro_rules! assert_fail {
    ($($arg:tt)+) => { $crate::log_at!($crate::Severity::Assert, $($arg)+) };
}

#[cfg(test)]
mod tests {
    use crate::sink::MemorySink;
    use crate::{Logger, LoggerConfig, LookupMode, Severity};

    fn logger(lookup_disabled: bool) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let config = LoggerConfig { enabled: true, lookup_disabled, lookup_mode: LookupMode::Short };
        (Logger::new(config, sink.clone()), sink)
    }

    struct Radio {
        logger: Logger,
    }

    impl Radio {
        fn tune(&self, freq: u32) {
            crate::info!(logger: &self.logger, "tuned to {}", freq);
        }

        fn announce(&self) {
            crate::info!(logger: &self.logger, of: self, "on air");
        }
    }

    #[test]
    fn tag_and_args() {
        let (l, sink) = logger(true);
        crate::debug!(logger: &l, tag: "Net", "connected to {}:{}", "host", 80);

        let e = &sink.entries()[0];
        assert_eq!(e.severity, Severity::Debug);
        assert_eq!(e.tag, "Net");
        assert_eq!(e.message, "connected to host:80");
    }

    #[test]
    fn lookup_tag_from_enclosing_method() {
        let sink = MemorySink::new();
        let radio = Radio {
            logger: Logger::new(
                LoggerConfig { enabled: true, lookup_disabled: false, lookup_mode: LookupMode::Full },
                sink.clone(),
            ),
        };
        radio.tune(101);

        let e = &sink.entries()[0];
        assert_eq!(e.tag, "Radio");
        assert!(e.message.starts_with("[(macros.rs:"), "{}", e.message);
        assert!(e.message.ends_with("#tune] tuned to 101"), "{}", e.message);
    }

    #[test]
    fn object_tag() {
        let (l, sink) = logger(true);
        let radio = Radio { logger: l };
        radio.announce();
        drop(radio);
        assert_eq!(sink.entries()[0].tag, "Radio");
    }

    #[test]
    fn lookup_disabled_uses_default_tag() {
        let (l, sink) = logger(true);
        crate::warn!(logger: &l, "plain");
        let e = &sink.entries()[0];
        assert_eq!(e.tag, "Logger");
        assert_eq!(e.message, "plain");
    }

    #[test]
    fn error_attached() {
        let (l, sink) = logger(true);
        let err = std::io::Error::other("boom");
        crate::error!(logger: &l, tag: "Io", err: err, "read {} failed", "a.txt");
        let e = &sink.entries()[0];
        assert_eq!(e.message, "read a.txt failed");
        assert_eq!(e.error.as_deref(), Some("boom"));
    }

    #[test]
    fn disabled_skips_argument_evaluation() {
        let (l, sink) = logger(true);
        l.set_enabled(false);
        let mut evaluated = false;
        crate::verbose!(logger: &l, "{}", {
            evaluated = true;
            1
        });
        assert!(!evaluated);
        assert!(sink.is_empty());
    }

    #[test]
    fn every_level_macro() {
        let (l, sink) = logger(true);
        crate::verbose!(logger: &l, tag: "T", "v");
        crate::debug!(logger: &l, tag: "T", "d");
        crate::info!(logger: &l, tag: "T", "i");
        crate::warn!(logger: &l, tag: "T", "w");
        crate::error!(logger: &l, tag: "T", "e");
        crate::assert_fail!(logger: &l, tag: "T", "a");
        crate::log_at!(Severity::Info, logger: &l, tag: "T", "generic");

        let seen: Vec<Severity> = sink.entries().iter().map(|e| e.severity).collect();
        let mut expected = Severity::ALL.to_vec();
        expected.push(Severity::Info);
        assert_eq!(seen, expected);
    }
}
