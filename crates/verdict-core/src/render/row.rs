//! Log table rows.

use tracing::warn;

use crate::error::CompileError;
use crate::format::{escape_newlines, Formatter};
use crate::fragment::{markup, Element, Node};
use crate::model::{LogColumns, LogEntry};
use crate::template::{TemplateKind, TemplateProvider};

use super::slot;

const KIND: TemplateKind = TemplateKind::LogRow;

/// Which pass of the tree walk a row is built in.
///
/// Rows of a top-level test re-parse their details and fall back to
/// literal text when the markup is malformed. Rows of child nodes embed
/// the escaped details as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPass {
    Root,
    Nested,
}

/// Builds one row for `log` in a table of width `columns`.
pub fn build_row(
    log: &LogEntry,
    columns: LogColumns,
    pass: RowPass,
    templates: &dyn TemplateProvider,
    formatter: &dyn Formatter,
) -> Result<Element, CompileError> {
    let mut row = templates.skeleton(KIND, columns)?;
    let status = log.log_status.as_str();

    slot(&mut row, KIND, "td.timestamp")?.set_text(formatter.format_time(&log.timestamp));

    slot(&mut row, KIND, "td.status")?
        .add_class(status)
        .set_attr("title", status);
    slot(&mut row, KIND, "td.status > i")?.add_class(&formatter.icon_for(log.log_status));

    if columns.has_step_name() {
        slot(&mut row, KIND, ".step-name")?.set_text(log.step_name.clone());
    }

    let details = escape_newlines(&log.details);
    let cell = slot(&mut row, KIND, ".step-details")?;
    match pass {
        RowPass::Root => match markup::normalize(&details) {
            Ok(normalized) => {
                cell.append_child(Node::Markup(normalized));
            }
            Err(errors) => {
                warn!(
                    errors = ?errors,
                    "Malformed log details, embedding as literal text"
                );
                cell.set_text(details);
            }
        },
        RowPass::Nested => {
            cell.append_markup(details);
        }
    }

    Ok(row)
}
