//! Default values for Verdict configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Format Defaults
// ============================================================================

/// Date-time pattern for test start and end times.
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time pattern for log row timestamps.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Namespace prepended to icon names before they are applied as a class.
pub const DEFAULT_ICON_PREFIX: &str = "fa-";

// ============================================================================
// Report Defaults
// ============================================================================

/// Default page title for rendered reports.
pub const DEFAULT_REPORT_TITLE: &str = "Test Report";

// ============================================================================
// File Locations
// ============================================================================

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "verdict.toml";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "verdict";

/// File name inside [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.toml";
