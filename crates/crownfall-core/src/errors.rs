//! Errors surfaced while building a match from external input.
//!
//! The simulation tick itself never fails; these only cover configuration
//! and class selection coming from the host.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A class name that is not part of the roster.
    UnknownClass(String),
    /// A config value outside its legal range.
    InvalidField {
        field: &'static str,
        reason: String,
    },
    /// The config document could not be parsed.
    Parse(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownClass(name) => write!(f, "unknown fighter class '{name}'"),
            ConfigError::InvalidField { field, reason } => {
                write!(f, "invalid config field `{field}`: {reason}")
            }
            ConfigError::Parse(msg) => write!(f, "failed to parse match config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
