//! crates/lvlog/src/severity.rs
//! The four ordered severities and their names, prefixes and numeric values.

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Message severity, ordered from least to most serious.
///
/// A message is emitted when its severity is greater than or equal to the
/// logger's threshold, so the derived [`Ord`] is the gating rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Severity {
    /// Diagnostic detail, off by default.
    Debug = 0,
    /// Routine progress messages. The default threshold.
    #[default]
    Info = 1,
    /// Something unexpected that does not stop the program.
    Warning = 2,
    /// A failure. Also the severity of fatal writes.
    Error = 3,
}

impl Severity {
    /// Every severity in ascending order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    /// Tag written in front of every message of this severity.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG] ",
            Self::Info => "[INFO] ",
            Self::Warning => "[WARNING] ",
            Self::Error => "[ERROR] ",
        }
    }

    /// Name accepted by `--log-level`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Numeric value, `0` for [`Debug`](Self::Debug) through `3` for [`Error`](Self::Error).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    /// Parses one of `DEBUG`, `INFO`, `WARNING` or `ERROR`. The match is
    /// exact: lower-case or padded names are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.name() == s)
            .ok_or_else(|| LogError::UnknownLevelName(s.to_owned()))
    }
}

impl TryFrom<i64> for Severity {
    type Error = LogError;

    fn try_from(value: i64) -> Result<Self, LogError> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_u8)
            .ok_or(LogError::InvalidLevel(value))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}
