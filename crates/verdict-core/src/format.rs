//! Formatting services used while compiling.
//!
//! Everything here is pure: the same inputs always give the same string.

use std::sync::LazyLock;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use regex::Regex;

use crate::config::{ConfigError, FormatConfig};
use crate::model::LogStatus;

/// Marker substituted for every newline in log details.
pub const LINE_BREAK: &str = "<br />";

static NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n").expect("valid regex"));

/// Replaces `\r\n` and `\n` with [`LINE_BREAK`].
pub fn escape_newlines(text: &str) -> String {
    NEWLINE.replace_all(text, LINE_BREAK).into_owned()
}

/// Formatting functions supplied to the compiler.
pub trait Formatter: Send + Sync {
    /// Start and end times in a test head.
    fn format_date_time(&self, instant: &DateTime<Utc>) -> String;

    /// Timestamps in log rows.
    fn format_time(&self, instant: &DateTime<Utc>) -> String;

    /// Time taken between `start` and `end`.
    fn format_elapsed(&self, end: &DateTime<Utc>, start: &DateTime<Utc>) -> String;

    /// Class applied to a log row's status icon.
    fn icon_for(&self, status: LogStatus) -> String;

    /// Text appended to a test name when the test carries an internal warning.
    fn warning_marker(&self, warning: &str) -> String {
        format!(" [warning: {warning}]")
    }
}

// =============================================================================
// ELAPSED TIME
// =============================================================================

/// Truncated elapsed time between two instants.
///
/// Hours wrap at 24: a span of 25 hours reads as 1 hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub millis: i64,
}

impl Elapsed {
    pub fn between(end: &DateTime<Utc>, start: &DateTime<Utc>) -> Self {
        let diff = (*end - *start).num_milliseconds();
        Self {
            hours: diff / (60 * 60 * 1000) % 24,
            minutes: diff / (60 * 1000) % 60,
            seconds: diff / 1000 % 60,
            millis: diff % 1000,
        }
    }

    /// `"<h>h <m>m <s>s"`.
    pub fn to_hms(&self) -> String {
        format!("{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

// =============================================================================
// CHRONO FORMATTER
// =============================================================================

/// Default [`Formatter`] backed by chrono strftime patterns.
#[derive(Debug, Clone)]
pub struct ChronoFormatter {
    date_time_format: String,
    time_format: String,
    icon_prefix: String,
}

impl ChronoFormatter {
    /// Builds a formatter, rejecting patterns chrono cannot render.
    pub fn new(config: &FormatConfig) -> Result<Self, ConfigError> {
        validate_pattern("date_time_format", &config.date_time_format)?;
        validate_pattern("time_format", &config.time_format)?;

        Ok(Self {
            date_time_format: config.date_time_format.clone(),
            time_format: config.time_format.clone(),
            icon_prefix: config.icon_prefix.clone(),
        })
    }
}

impl Default for ChronoFormatter {
    fn default() -> Self {
        let config = FormatConfig::default();
        Self {
            date_time_format: config.date_time_format,
            time_format: config.time_format,
            icon_prefix: config.icon_prefix,
        }
    }
}

impl Formatter for ChronoFormatter {
    fn format_date_time(&self, instant: &DateTime<Utc>) -> String {
        instant.format(&self.date_time_format).to_string()
    }

    fn format_time(&self, instant: &DateTime<Utc>) -> String {
        instant.format(&self.time_format).to_string()
    }

    fn format_elapsed(&self, end: &DateTime<Utc>, start: &DateTime<Utc>) -> String {
        let elapsed = Elapsed::between(end, start);
        format!("{}+{}ms", elapsed.to_hms(), elapsed.millis)
    }

    fn icon_for(&self, status: LogStatus) -> String {
        format!("{}{}", self.icon_prefix, status.icon())
    }
}

/// Rejects strftime patterns that would fail at render time.
pub fn validate_pattern(field: &str, pattern: &str) -> Result<(), ConfigError> {
    if pattern.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must not be empty")));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Invalid(format!(
            "{field} is not a valid strftime pattern: {pattern}"
        )));
    }
    Ok(())
}
