//! Log severity levels

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, totally ordered from `Trace` up to `Off`.
///
/// `Off` exists only as a threshold value that disables everything; no
/// record is ever emitted at `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Finest-grained diagnostics
    Trace,
    /// Debugging information
    Debug,
    /// Normal operational messages
    Info,
    /// Something unexpected that the application can continue past
    Warn,
    /// A failure of the current operation
    Error,
    /// A failure the application cannot recover from
    Critical,
    /// Threshold-only value disabling all output
    Off,
}

impl Level {
    /// Three-letter tag used by the console backend.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Trace => "TRC",
            Level::Debug => "DBG",
            Level::Info => "INF",
            Level::Warn => "WRN",
            Level::Error => "ERR",
            Level::Critical => "CRI",
            Level::Off => "OFF",
        }
    }

    /// Whether a record at this level passes a `minimum` threshold.
    #[inline]
    pub fn passes(self, minimum: Level) -> bool {
        self != Level::Off && self >= minimum
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Off => "OFF",
        };
        f.write_str(name)
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trace" | "trc" => Ok(Level::Trace),
            "debug" | "dbg" => Ok(Level::Debug),
            "info" | "information" | "inf" => Ok(Level::Info),
            "warn" | "warning" | "wrn" => Ok(Level::Warn),
            "error" | "err" => Ok(Level::Error),
            "critical" | "cri" => Ok(Level::Critical),
            "off" | "none" => Ok(Level::Off),
            _ => Err(Error::InvalidLevel { value: s.to_owned() }),
        }
    }
}
