//! Status values for tests and log entries.
//!
//! A test's overall status and the status of a single log event are
//! different things, so they get different types. Both draw their names
//! and icons from the same lookup table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompileError;

// =============================================================================
// SHARED LOOKUP TABLE
// =============================================================================

/// Canonical status name to icon name.
const STATUS_TABLE: &[(&str, &str)] = &[
    ("pass", "check-circle"),
    ("fail", "times-circle"),
    ("fatal", "exclamation-circle"),
    ("error", "exclamation-circle"),
    ("warning", "warning"),
    ("info", "info"),
    ("skip", "chevron-right"),
    ("unknown", "question"),
];

/// Icon name for a canonical status name.
///
/// Returns `None` for names outside the table.
pub fn icon_name(status: &str) -> Option<&'static str> {
    STATUS_TABLE
        .iter()
        .find(|(name, _)| *name == status)
        .map(|(_, icon)| *icon)
}

fn canonical(value: &str) -> Result<&'static str, CompileError> {
    let lower = value.trim().to_lowercase();
    STATUS_TABLE
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(name, _)| *name)
        .ok_or_else(|| CompileError::UnknownStatus(value.to_string()))
}

// =============================================================================
// TEST STATUS
// =============================================================================

/// Overall outcome of a test node.
///
/// Deserialization goes through [`FromStr`], so an unknown name is
/// reported as [`CompileError::UnknownStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TestStatus {
    Pass,
    Fail,
    Fatal,
    Error,
    Warning,
    Info,
    Skip,
    Unknown,
}

impl TestStatus {
    /// Canonical name, used both as a class and as visible text.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
            TestStatus::Fatal => "fatal",
            TestStatus::Error => "error",
            TestStatus::Warning => "warning",
            TestStatus::Info => "info",
            TestStatus::Skip => "skip",
            TestStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestStatus {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match canonical(s)? {
            "pass" => TestStatus::Pass,
            "fail" => TestStatus::Fail,
            "fatal" => TestStatus::Fatal,
            "error" => TestStatus::Error,
            "warning" => TestStatus::Warning,
            "info" => TestStatus::Info,
            "skip" => TestStatus::Skip,
            _ => TestStatus::Unknown,
        })
    }
}

impl TryFrom<String> for TestStatus {
    type Error = CompileError;

    fn try_from(value: String) -> Result<Self, CompileError> {
        value.parse()
    }
}

// =============================================================================
// LOG STATUS
// =============================================================================

/// Status of a single recorded log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogStatus {
    Pass,
    Fail,
    Fatal,
    Error,
    Warning,
    Info,
    Skip,
    Unknown,
}

impl LogStatus {
    /// Canonical name, used as class, `title` attribute and icon key.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Pass => "pass",
            LogStatus::Fail => "fail",
            LogStatus::Fatal => "fatal",
            LogStatus::Error => "error",
            LogStatus::Warning => "warning",
            LogStatus::Info => "info",
            LogStatus::Skip => "skip",
            LogStatus::Unknown => "unknown",
        }
    }

    /// Icon name from the shared lookup table.
    pub fn icon(&self) -> &'static str {
        icon_name(self.as_str()).unwrap_or("question")
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogStatus {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match canonical(s)? {
            "pass" => LogStatus::Pass,
            "fail" => LogStatus::Fail,
            "fatal" => LogStatus::Fatal,
            "error" => LogStatus::Error,
            "warning" => LogStatus::Warning,
            "info" => LogStatus::Info,
            "skip" => LogStatus::Skip,
            _ => LogStatus::Unknown,
        })
    }
}

impl TryFrom<String> for LogStatus {
    type Error = CompileError;

    fn try_from(value: String) -> Result<Self, CompileError> {
        value.parse()
    }
}
