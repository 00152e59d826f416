use std::fmt;

/// A configuration value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Name of the setting being parsed (e.g. `"lookup mode"`).
    pub key: &'static str,
    /// The rejected input, verbatim.
    pub value: String,
    /// Human-readable list of accepted spellings.
    pub expected: &'static str,
}

impl ConfigError {
    pub(crate) fn new(key: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        Self { key, value: value.into(), expected }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} {:?}: expected one of {}",
            self.key, self.value, self.expected
        )
    }
}

impl std::error::Error for ConfigError {}
