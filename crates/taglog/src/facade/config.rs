use core::fmt;
use core::str::FromStr;

use anyhow::{Context, Result};

use crate::error::ConfigError;

/// Environment variable holding the initial enabled flag.
pub const ENV_ENABLED: &str = "TAGLOG_ENABLED";

/// Environment variable holding the lookup setting (`off`, `short`, `full`).
pub const ENV_LOOKUP: &str = "TAGLOG_LOOKUP";

/// Verbosity of the call-site prefix.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LookupMode {
    /// `[(file:line)#method]`
    Full,
    /// `(file:line)`
    #[default]
    Short,
}

impl LookupMode {
    pub(crate) const fn to_u8(self) -> u8 {
        match self {
            LookupMode::Full => 0,
            LookupMode::Short => 1,
        }
    }

    pub(crate) const fn from_u8(v: u8) -> Self {
        match v {
            0 => LookupMode::Full,
            _ => LookupMode::Short,
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LookupMode::Full => "full",
            LookupMode::Short => "short",
        })
    }
}

impl FromStr for LookupMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(LookupMode::Full),
            "short" => Ok(LookupMode::Short),
            _ => Err(ConfigError::new("lookup mode", s, "short, full")),
        }
    }
}

/// Facade settings.
///
/// A plain value: build one, hand it to [`Logger::new`](crate::Logger::new)
/// or [`Logger::apply`](crate::Logger::apply).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LoggerConfig {
    /// Master switch. When off, every log call is a no-op.
    pub enabled: bool,
    /// When set, no call-site prefix is emitted and absent tags become `"Logger"`.
    pub lookup_disabled: bool,
    pub lookup_mode: LookupMode,
}

impl Default for LoggerConfig {
    /// Enabled in debug builds, silent in release builds.
    fn default() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
            lookup_disabled: false,
            lookup_mode: LookupMode::Short,
        }
    }
}

impl LoggerConfig {
    /// Default config with overrides from `TAGLOG_ENABLED` and `TAGLOG_LOOKUP`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`LoggerConfig::from_env`], reading variables through `get`.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = get(ENV_ENABLED) {
            config.enabled = parse_flag(&raw).with_context(|| format!("failed to read {ENV_ENABLED}"))?;
        }

        if let Some(raw) = get(ENV_LOOKUP) {
            if raw.trim().eq_ignore_ascii_case("off") {
                config.lookup_disabled = true;
            } else {
                config.lookup_mode = raw
                    .parse::<LookupMode>()
                    .map_err(|_| ConfigError::new("lookup setting", raw.as_str(), "off, short, full"))
                    .with_context(|| format!("failed to read {ENV_LOOKUP}"))?;
            }
        }

        Ok(config)
    }
}

/// Parses a boolean switch (`1/0`, `true/false`, `on/off`, `yes/no`).
pub fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::new("flag", raw, "1, 0, true, false, on, off, yes, no")),
    }
}
