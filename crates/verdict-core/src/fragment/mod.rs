//! Rendered fragment trees.
//!
//! # Module Structure
//!
//! - `element` - the element tree and slot selection
//! - `selector` - CSS-style selector matching
//! - `markup` - markup parsing for skeletons and log details
//! - `html` - serialization back to HTML

mod element;
mod html;
pub mod markup;
mod selector;

pub use element::{Element, Node};
pub use html::html_escape;
pub use selector::Selector;
