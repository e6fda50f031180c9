//! Recursive compilation of a test tree.
//!
//! ```text
//! root test
//!   node 1        node-1x
//!   node 2        node-1x
//!     node 3      node-2x
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::config::{ConfigError, ReportConfig};
use crate::error::CompileError;
use crate::format::{ChronoFormatter, Elapsed, Formatter};
use crate::fragment::Element;
use crate::model::{LogColumns, TestNode};
use crate::template::{BuiltinTemplates, TemplateKind, TemplateProvider};

use super::binder::{bind_head, bind_tags};
use super::row::{build_row, RowPass};
use super::{depth_class, slot, HAS_CHILDREN_CLASS, ID_ATTRIBUTE};

/// Compiles test trees into report fragments.
///
/// Holds no per-compilation state; one compiler can serve any number of
/// trees, from any number of threads.
#[derive(Clone)]
pub struct TreeCompiler {
    templates: Arc<dyn TemplateProvider>,
    formatter: Arc<dyn Formatter>,
}

impl TreeCompiler {
    pub fn new(templates: Arc<dyn TemplateProvider>, formatter: Arc<dyn Formatter>) -> Self {
        Self {
            templates,
            formatter,
        }
    }

    /// Compiler using the embedded templates and a chrono formatter.
    pub fn from_config(config: &ReportConfig) -> Result<Self, ConfigError> {
        let templates = BuiltinTemplates::new()
            .map_err(|e| ConfigError::Invalid(format!("built-in templates: {e}")))?;
        let formatter = ChronoFormatter::new(&config.format)?;
        Ok(Self::new(Arc::new(templates), Arc::new(formatter)))
    }

    /// Compiles one top-level test and everything below it.
    ///
    /// Either the whole tree compiles or an error is returned.
    pub fn compile(&self, root: &TestNode) -> Result<Element, CompileError> {
        let columns = validate(root)?;
        debug!(test = %root.name, id = %root.id, columns = %columns, "Compiling test");

        let skeleton = self.templates.skeleton(TemplateKind::RootTest, columns)?;
        let skeleton = bind_head(root, skeleton, self.formatter.as_ref())?;
        let mut fragment = bind_tags(root, skeleton, columns, self.templates.as_ref())?;

        if root.has_children() {
            slot(&mut fragment, TemplateKind::RootTest, ".test")?.add_class(HAS_CHILDREN_CLASS);
        }

        for log in &root.logs {
            let row = build_row(
                log,
                columns,
                RowPass::Root,
                self.templates.as_ref(),
                self.formatter.as_ref(),
            )?;
            slot(&mut fragment, TemplateKind::RootTest, "tbody")?.append_child(row);
        }

        let children = self.compile_children(root, 1)?;
        let node_list = slot(&mut fragment, TemplateKind::RootTest, ".node-list")?;
        for child in children {
            node_list.append_child(child);
        }

        Ok(fragment)
    }

    /// Compiles each top-level test in order, stopping at the first error.
    pub fn compile_all(&self, roots: &[TestNode]) -> Result<Vec<Element>, CompileError> {
        roots.iter().map(|root| self.compile(root)).collect()
    }

    /// Compiles the children of `parent`, which sit at `depth` below the root.
    fn compile_children(&self, parent: &TestNode, depth: usize) -> Result<Vec<Element>, CompileError> {
        let mut compiled = Vec::with_capacity(parent.children.len());

        for node in &parent.children {
            let columns = validate(node)?;
            let kind = TemplateKind::ChildNode;
            let status = node.status.as_str();
            let elapsed = Elapsed::between(&node.ended_at, &node.started_at);

            let mut li = self.templates.skeleton(kind, columns)?;
            li.add_class(&depth_class(depth))
                .add_class(status)
                .set_attr(ID_ATTRIBUTE, node.id.to_string());

            slot(&mut li, kind, ".test-node-name")?.set_text(node.name.clone());
            slot(&mut li, kind, ".test-started-time")?
                .set_text(self.formatter.format_date_time(&node.started_at));
            slot(&mut li, kind, ".test-ended-time")?
                .set_text(self.formatter.format_date_time(&node.ended_at));
            slot(&mut li, kind, ".test-time-taken")?.set_text(elapsed.to_hms());

            if !node.logs.is_empty() {
                slot(&mut li, kind, ".test-node")?.add_class(status);
                slot(&mut li, kind, ".test-status")?
                    .add_class(status)
                    .set_text(status);

                for log in &node.logs {
                    let row = build_row(
                        log,
                        columns,
                        RowPass::Nested,
                        self.templates.as_ref(),
                        self.formatter.as_ref(),
                    )?;
                    slot(&mut li, kind, "tbody")?.append_child(row);
                }
            }

            if node.has_children() {
                let grandchildren = self.compile_children(node, depth + 1)?;
                let node_list = slot(&mut li, kind, ".node-list")?;
                for grandchild in grandchildren {
                    node_list.append_child(grandchild);
                }
            }

            compiled.push(li);
        }

        Ok(compiled)
    }
}

/// Checks the per-node invariants the compiler refuses to coerce.
fn validate(node: &TestNode) -> Result<LogColumns, CompileError> {
    let columns = u8::try_from(node.log_column_count)
        .ok()
        .and_then(|count| LogColumns::try_from(count).ok())
        .ok_or_else(|| CompileError::UnsupportedColumnCount {
            test: node.name.clone(),
            count: node.log_column_count,
        })?;

    if let Some(declared) = node.has_child_nodes {
        if declared != node.has_children() {
            return Err(CompileError::ChildFlagMismatch {
                test: node.name.clone(),
                declared,
                actual: node.children.len(),
            });
        }
    }

    if node.ended_at < node.started_at {
        return Err(CompileError::InvalidTiming {
            test: node.name.clone(),
        });
    }

    Ok(columns)
}
