//! Skeleton templates for report fragments.
//!
//! Skeleton sources are stored as separate files and embedded at compile
//! time using `include_str!`:
//! - `html/root_test.html` - a top-level test
//! - `html/child_node.html` - a nested child node
//! - `html/log_row.html` - one log table row
//! - `html/chip.html` - a category or author chip
//!
//! Sources contain placeholders that depend on the log column count:
//! - `{{STEP_HEADER}}` - step-name header cell (four columns only)
//! - `{{STEP_CELL}}` - step-name body cell (four columns only)
//! - `{{CHIP_CLASS}}` - `category` or `author`

use std::collections::HashMap;
use std::fmt;

use crate::error::CompileError;
use crate::fragment::{markup, Element};
use crate::model::LogColumns;

const ROOT_TEST_TEMPLATE: &str = include_str!("html/root_test.html");
const CHILD_NODE_TEMPLATE: &str = include_str!("html/child_node.html");
const LOG_ROW_TEMPLATE: &str = include_str!("html/log_row.html");
const CHIP_TEMPLATE: &str = include_str!("html/chip.html");

const STEP_HEADER: &str = "<th>StepName</th>";
const STEP_CELL: &str = "<td class='step-name'></td>";

/// Kind of skeleton requested from a [`TemplateProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    RootTest,
    ChildNode,
    LogRow,
    CategoryChip,
    AuthorChip,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::RootTest,
        TemplateKind::ChildNode,
        TemplateKind::LogRow,
        TemplateKind::CategoryChip,
        TemplateKind::AuthorChip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::RootTest => "root-test",
            TemplateKind::ChildNode => "child-node",
            TemplateKind::LogRow => "log-row",
            TemplateKind::CategoryChip => "category-chip",
            TemplateKind::AuthorChip => "author-chip",
        }
    }

    /// Selector of the top-level item extracted from a parsed source.
    pub fn root_selector(&self) -> &'static str {
        match self {
            TemplateKind::RootTest => "li.test",
            TemplateKind::ChildNode => "li.node",
            TemplateKind::LogRow => "tr",
            TemplateKind::CategoryChip => ".category",
            TemplateKind::AuthorChip => ".author",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of fresh, independent skeletons.
///
/// Every call must return a new fragment; the compiler mutates what it
/// receives.
pub trait TemplateProvider: Send + Sync {
    fn skeleton(&self, kind: TemplateKind, columns: LogColumns) -> Result<Element, CompileError>;
}

/// Markup source for a kind and column count, placeholders substituted.
pub fn template_source(kind: TemplateKind, columns: LogColumns) -> String {
    let (step_header, step_cell) = if columns.has_step_name() {
        (STEP_HEADER, STEP_CELL)
    } else {
        ("", "")
    };

    match kind {
        TemplateKind::RootTest => ROOT_TEST_TEMPLATE.replace("{{STEP_HEADER}}", step_header),
        TemplateKind::ChildNode => CHILD_NODE_TEMPLATE.replace("{{STEP_HEADER}}", step_header),
        TemplateKind::LogRow => LOG_ROW_TEMPLATE.replace("{{STEP_CELL}}", step_cell),
        TemplateKind::CategoryChip => CHIP_TEMPLATE.replace("{{CHIP_CLASS}}", "category"),
        TemplateKind::AuthorChip => CHIP_TEMPLATE.replace("{{CHIP_CLASS}}", "author"),
    }
}

/// Parses `source` and extracts the item for `kind`.
pub fn parse_skeleton(kind: TemplateKind, source: &str) -> Result<Element, CompileError> {
    markup::parse_fragment(source)
        .select_first(kind.root_selector())
        .cloned()
        .ok_or_else(|| CompileError::InvalidTemplate {
            kind,
            message: format!("no element matches '{}'", kind.root_selector()),
        })
}

/// The embedded skeletons, parsed once and cloned per request.
pub struct BuiltinTemplates {
    skeletons: HashMap<(TemplateKind, LogColumns), Element>,
}

impl BuiltinTemplates {
    pub fn new() -> Result<Self, CompileError> {
        let mut skeletons = HashMap::new();
        for kind in TemplateKind::ALL {
            for columns in [LogColumns::Three, LogColumns::Four] {
                let skeleton = parse_skeleton(kind, &template_source(kind, columns))?;
                skeletons.insert((kind, columns), skeleton);
            }
        }
        Ok(Self { skeletons })
    }
}

impl TemplateProvider for BuiltinTemplates {
    fn skeleton(&self, kind: TemplateKind, columns: LogColumns) -> Result<Element, CompileError> {
        self.skeletons
            .get(&(kind, columns))
            .cloned()
            .ok_or_else(|| CompileError::InvalidTemplate {
                kind,
                message: format!("no skeleton for {columns} columns"),
            })
    }
}
