//! crates/logging/src/level.rs
//! Ordered log level enumeration resolved from the `--log-level` flag.

use std::fmt;
use std::str::FromStr;

/// Verbosity threshold for the wrapped orchestrator's status stream.
///
/// Levels are totally ordered by their integer rank, so threshold checks are
/// plain comparisons. The level is resolved once at startup and never
/// mutated afterwards.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum LogLevel {
    /// Diagnostic output including the wrapper's own tracing events.
    Debug = 1,
    /// Default level; shows every orchestrator status message.
    Info = 2,
    /// Filters the per-object lifecycle chatter.
    Warning = 3,
    /// Filters the per-object lifecycle chatter.
    Error = 4,
    /// Filters the per-object lifecycle chatter.
    Critical = 5,
}

impl LogLevel {
    /// Canonical flag spellings, in rank order.
    pub const NAMES: [&'static str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

    /// Returns the integer rank used for threshold comparisons.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the canonical uppercase spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Reports whether this level suppresses the ignored status verbs.
    ///
    /// The comparison is strictly greater than `INFO`: `INFO` itself still
    /// shows the chatter, matching the behaviour the flag has always had.
    #[must_use]
    pub const fn filters_status_noise(self) -> bool {
        self.rank() > Self::Info.rank()
    }

    /// Maps the level onto a `tracing` filter directive for the wrapper's
    /// own diagnostics.
    ///
    /// `CRITICAL` has no `tracing` counterpart and collapses onto `error`.
    #[must_use]
    pub const fn tracing_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a `--log-level` value does not match any level name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown log level '{0}'; expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL")]
pub struct ParseLevelError(String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Parses the exact uppercase level names; anything else is rejected.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(ParseLevelError(other.to_owned())),
        }
    }
}
