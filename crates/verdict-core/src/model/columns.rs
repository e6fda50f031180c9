use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of columns in a log table.
///
/// Three columns: Timestamp | Status | Details.
/// Four columns add a step name before the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LogColumns {
    Three,
    Four,
}

impl LogColumns {
    pub fn count(&self) -> u8 {
        match self {
            LogColumns::Three => 3,
            LogColumns::Four => 4,
        }
    }

    /// Whether rows of this width carry a step-name cell.
    pub fn has_step_name(&self) -> bool {
        matches!(self, LogColumns::Four)
    }
}

impl TryFrom<u8> for LogColumns {
    type Error = UnsupportedColumns;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(LogColumns::Three),
            4 => Ok(LogColumns::Four),
            other => Err(UnsupportedColumns(other)),
        }
    }
}

impl From<LogColumns> for u8 {
    fn from(columns: LogColumns) -> Self {
        columns.count()
    }
}

impl fmt::Display for LogColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// A column count outside the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported log column count {0} (expected 3 or 4)")]
pub struct UnsupportedColumns(pub u8);
