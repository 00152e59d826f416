use core::fmt;
use core::str::FromStr;

use crate::error::ConfigError;

/// Severity of a log call.
///
/// Severities carry no filtering semantics of their own; they only select
/// how the sink records the line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    /// A condition that should never happen.
    ///
    /// Logged like any other line; no abort and no crash report.
    Assert,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Assert,
    ];

    /// One-letter code used in logcat-style output (`D/Tag: message`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Severity::Verbose => 'V',
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warn => 'W',
            Severity::Error => 'E',
            Severity::Assert => 'A',
        }
    }

    /// Level used when forwarding to the `log` facade.
    ///
    /// `log` has no assert level, so `Assert` shares `Error`.
    #[inline]
    pub const fn to_level(self) -> log::Level {
        match self {
            Severity::Verbose => log::Level::Trace,
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
            Severity::Error | Severity::Assert => log::Level::Error,
        }
    }

    /// Inverse of [`Severity::to_level`].
    #[inline]
    pub const fn from_level(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Severity::Verbose,
            log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warn,
            log::Level::Error => Severity::Error,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Assert => "assert",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let mut chars = needle.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_uppercase()),
            _ => None,
        };
        Severity::ALL
            .into_iter()
            .find(|sev| sev.name().eq_ignore_ascii_case(needle) || letter == Some(sev.letter()))
            .ok_or_else(|| {
                ConfigError::new("severity", s, "verbose, debug, info, warn, error, assert (or V D I W E A)")
            })
    }
}
