//! Compilation of test trees into report fragments.
//!
//! # Module Structure
//!
//! - `binder` - head fields and category/author chips of a test
//! - `row` - one log table row
//! - `compiler` - the recursive tree walk

mod binder;
mod compiler;
mod row;

pub use binder::{bind_head, bind_tags};
pub use compiler::TreeCompiler;
pub use row::{build_row, RowPass};

use crate::error::CompileError;
use crate::fragment::Element;
use crate::template::TemplateKind;

// =============================================================================
// Structural class names
// =============================================================================

/// Marks a slot that must stay in the output but not be displayed.
pub const HIDE_CLASS: &str = "hide";

/// Marks a top-level test that has child nodes.
pub const HAS_CHILDREN_CLASS: &str = "has-children";

/// Attribute carrying a test's id.
pub const ID_ATTRIBUTE: &str = "data-test-id";

/// Depth-scoped class of a child node: `node-1x`, `node-2x`, ...
pub fn depth_class(depth: usize) -> String {
    format!("node-{depth}x")
}

/// First element matching `selector`, or a template error naming the slot.
pub(crate) fn slot<'a>(
    fragment: &'a mut Element,
    kind: TemplateKind,
    selector: &str,
) -> Result<&'a mut Element, CompileError> {
    fragment
        .select_first_mut(selector)
        .ok_or_else(|| CompileError::missing_slot(kind, selector))
}
