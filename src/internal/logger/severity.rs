// src/internal/logger/severity.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LogError;

pub const ANSI_RESET: &str = "\x1b[0m";
pub const ANSI_GREY: &str = "\x1b[90m";
pub const ANSI_BOLD_WHITE: &str = "\x1b[97;1m";
pub const ANSI_BOLD_RED: &str = "\x1b[91;1m";
pub const ANSI_BOLD_GREEN: &str = "\x1b[92;1m";
pub const ANSI_BOLD_YELLOW: &str = "\x1b[93;1m";

/// Severity of a log record, ordered from least to most important.
///
/// `ShowNone` is a sentinel one past the highest real severity. It is a valid
/// filtering threshold (nothing is shown) but is never emitted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String")]
#[repr(u8)]
pub enum Severity {
    #[serde(rename = "debug")]
    #[default]
    Debug = 1,
    #[serde(rename = "info")]
    Info = 2,
    #[serde(rename = "warning")]
    Warning = 3,
    #[serde(rename = "error")]
    Error = 4,
    #[serde(rename = "none")]
    ShowNone = 5,
}

impl Severity {
    /// Every severity that can actually be emitted, lowest first.
    pub const EMITTABLE: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_emittable(self) -> bool {
        self < Severity::ShowNone
    }

    /// The plain label printed between brackets.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::ShowNone => "none",
        }
    }

    /// ANSI escape that opens the label's style.
    pub fn ansi_style(self) -> &'static str {
        match self {
            Severity::Debug => ANSI_BOLD_GREEN,
            Severity::Info => ANSI_BOLD_WHITE,
            Severity::Warning => ANSI_BOLD_YELLOW,
            Severity::Error => ANSI_BOLD_RED,
            Severity::ShowNone => "",
        }
    }

    pub fn styled(self, color: bool) -> StyledLabel {
        StyledLabel {
            severity: self,
            color,
        }
    }

    /// `tracing` filter directive with the same cut-off.
    pub fn as_directive(self) -> &'static str {
        match self {
            Severity::Debug => "trace",
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error => "error",
            Severity::ShowNone => "off",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Severity {
    type Error = LogError;

    fn try_from(value: u8) -> Result<Self, LogError> {
        match value {
            1 => Ok(Severity::Debug),
            2 => Ok(Severity::Info),
            3 => Ok(Severity::Warning),
            4 => Ok(Severity::Error),
            // The sentinel converts so callers can use it as a threshold;
            // `Logger::log` still refuses to emit it.
            5 => Ok(Severity::ShowNone),
            other => Err(LogError::InvalidArguments(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}' (expected debug, info, warning, error or none)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "none" => Ok(Severity::ShowNone),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

// Deserialization goes through `FromStr` so config values accept the same
// spellings as the command line.
impl TryFrom<String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: String) -> Result<Self, <Severity as TryFrom<String>>::Error> {
        value.parse()
    }
}

/// Severity label, wrapped in its color when `color` is set.
#[derive(Debug, Clone, Copy)]
pub struct StyledLabel {
    severity: Severity,
    color: bool,
}

impl fmt::Display for StyledLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.color {
            write!(
                f,
                "{}{}{}",
                self.severity.ansi_style(),
                self.severity.label(),
                ANSI_RESET
            )
        } else {
            f.write_str(self.severity.label())
        }
    }
}
