//! HTML serialization of rendered fragments.

use super::element::{Element, Node};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Element {
    /// Serializes this element and its subtree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }

    /// Serializes only the children of this element.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in self.children() {
            write_node(child, &mut out);
        }
        out
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());

    if !element.classes().is_empty() {
        out.push_str(" class=\"");
        out.push_str(&html_escape(&element.classes().join(" ")));
        out.push('"');
    }
    for (name, value) in element.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape(value));
        out.push('"');
    }

    if VOID_ELEMENTS.contains(&element.tag()) {
        out.push_str(" />");
        return;
    }
    out.push('>');

    for child in element.children() {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(element) => write_element(element, out),
        Node::Text(text) => out.push_str(&html_escape(text)),
        Node::Markup(markup) => out.push_str(markup),
    }
}

/// Escape HTML special characters to prevent XSS.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
