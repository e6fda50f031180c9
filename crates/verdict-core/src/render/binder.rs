//! Head fields and attribute chips of a top-level test.

use crate::error::CompileError;
use crate::format::Formatter;
use crate::fragment::Element;
use crate::model::{LogColumns, TestNode};
use crate::template::{TemplateKind, TemplateProvider};

use super::{slot, HIDE_CLASS, ID_ATTRIBUTE};

const KIND: TemplateKind = TemplateKind::RootTest;

/// Fills name, id, status, timing and description slots.
///
/// An empty description still fills its slot; the slot is hidden
/// rather than removed.
pub fn bind_head(
    node: &TestNode,
    mut skeleton: Element,
    formatter: &dyn Formatter,
) -> Result<Element, CompileError> {
    let status = node.status.as_str();

    if node.description.is_empty() {
        slot(&mut skeleton, KIND, ".test-desc")?.add_class(HIDE_CLASS);
    }

    let mut name = node.name.clone();
    if let Some(warning) = &node.internal_warning {
        name.push_str(&formatter.warning_marker(warning));
    }
    slot(&mut skeleton, KIND, ".test-name")?.set_text(name);

    slot(&mut skeleton, KIND, ".test")?
        .set_attr(ID_ATTRIBUTE, node.id.to_string())
        .add_class(status);
    slot(&mut skeleton, KIND, ".test-status")?
        .add_class(status)
        .set_text(status);

    slot(&mut skeleton, KIND, ".test-started-time")?
        .set_text(formatter.format_date_time(&node.started_at));
    slot(&mut skeleton, KIND, ".test-ended-time")?
        .set_text(formatter.format_date_time(&node.ended_at));
    slot(&mut skeleton, KIND, ".test-time-taken")?
        .set_text(formatter.format_elapsed(&node.ended_at, &node.started_at));

    slot(&mut skeleton, KIND, ".test-desc")?.set_text(node.description.clone());

    Ok(skeleton)
}

/// Appends one chip per category, then one per author.
///
/// Every tag also adds its lower-cased name as a class on the
/// `.category-assigned` marker. Without any tag the attributes block is
/// hidden.
pub fn bind_tags(
    node: &TestNode,
    mut skeleton: Element,
    columns: LogColumns,
    templates: &dyn TemplateProvider,
) -> Result<Element, CompileError> {
    for category in &node.categories {
        let mut chip = templates.skeleton(TemplateKind::CategoryChip, columns)?;
        chip.set_text(category.name.clone());

        slot(&mut skeleton, KIND, ".categories")?.append_child(chip);
        slot(&mut skeleton, KIND, ".category-assigned")?.add_class(&category.class_name());
    }

    for author in &node.authors {
        let mut chip = templates.skeleton(TemplateKind::AuthorChip, columns)?;
        chip.set_text(author.name.clone());

        slot(&mut skeleton, KIND, ".authors")?.append_child(chip);
        slot(&mut skeleton, KIND, ".category-assigned")?.add_class(&author.class_name());
    }

    if !node.has_attributes() {
        slot(&mut skeleton, KIND, ".test-attributes")?.add_class(HIDE_CLASS);
    }

    Ok(skeleton)
}
