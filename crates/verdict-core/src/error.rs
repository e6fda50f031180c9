//! Compilation error types.

use thiserror::Error;

use crate::template::TemplateKind;

/// Errors that abort compilation of a test tree.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A skeleton lacks a slot the compiler needs.
    #[error("Template '{kind}' is missing required slot '{selector}'")]
    MissingSlot {
        kind: TemplateKind,
        selector: String,
    },

    /// A skeleton could not be produced at all.
    #[error("Invalid template '{kind}': {message}")]
    InvalidTemplate { kind: TemplateKind, message: String },

    #[error("Unsupported log column count {count} on test '{test}' (expected 3 or 4)")]
    UnsupportedColumnCount { test: String, count: i64 },

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// The producer's explicit child flag disagrees with the child list.
    #[error("Test '{test}' declares has_child_nodes = {declared} but has {actual} child nodes")]
    ChildFlagMismatch {
        test: String,
        declared: bool,
        actual: usize,
    },

    #[error("Test '{test}' ends before it starts")]
    InvalidTiming { test: String },
}

/// Broad class of a [`CompileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Broken contract with the template provider.
    Template,
    /// Input the compiler refuses to coerce.
    Configuration,
}

impl CompileError {
    pub fn missing_slot(kind: TemplateKind, selector: impl Into<String>) -> Self {
        CompileError::MissingSlot {
            kind,
            selector: selector.into(),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            CompileError::MissingSlot { .. } | CompileError::InvalidTemplate { .. } => {
                ErrorClass::Template
            }
            CompileError::UnsupportedColumnCount { .. }
            | CompileError::UnknownStatus(_)
            | CompileError::ChildFlagMismatch { .. }
            | CompileError::InvalidTiming { .. } => ErrorClass::Configuration,
        }
    }
}
