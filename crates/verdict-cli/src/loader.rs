//! Loading test trees from JSON or YAML files.

use std::path::Path;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use verdict_core::TestNode;

/// Input file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase) {
            Some(ext) if ext == "json" => Ok(InputFormat::Json),
            Some(ext) if ext == "yaml" || ext == "yml" => Ok(InputFormat::Yaml),
            _ => Err(eyre!(
                "Cannot tell the format of {} (expected .json, .yaml or .yml)",
                path.display()
            )),
        }
    }
}

/// Parses top-level tests from `content`.
///
/// A file holds either one top-level test or a list of them.
pub fn parse_tests(content: &str, format: InputFormat) -> Result<Vec<TestNode>> {
    let tests = match format {
        InputFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(content).wrap_err("Invalid JSON test file")?;
            let tests = if value.is_array() {
                serde_json::from_value(value)
            } else {
                serde_json::from_value(value).map(|test| vec![test])
            };
            tests.wrap_err("Invalid test record")?
        }
        InputFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(content).wrap_err("Invalid YAML test file")?;
            let tests = if value.is_sequence() {
                serde_yaml::from_value(value)
            } else {
                serde_yaml::from_value(value).map(|test| vec![test])
            };
            tests.wrap_err("Invalid test record")?
        }
    };
    Ok(tests)
}

/// Reads and parses the tests stored at `path`.
pub fn load_tests(path: &Path) -> Result<Vec<TestNode>> {
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    parse_tests(&content, format).wrap_err_with(|| format!("Failed to load {}", path.display()))
}
