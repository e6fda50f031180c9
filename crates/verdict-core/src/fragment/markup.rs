//! Markup parsing backed by `scraper` (html5ever).
//!
//! Used for two things: turning skeleton sources into [`Element`] trees,
//! and normalizing log details before they are embedded as markup.

use scraper::{ElementRef, Html, Node as HtmlNode};

use super::element::{Element, Node};

/// Parses a markup fragment into a synthetic `body` element.
///
/// Whitespace-only text between tags is dropped; skeletons are indented
/// source files and that indentation is not content.
pub fn parse_fragment(source: &str) -> Element {
    let html = Html::parse_fragment(source);
    let mut body = Element::new("body");
    append_children(&mut body, html.root_element());
    body
}

fn append_children(target: &mut Element, source: ElementRef<'_>) {
    for child in source.children() {
        match child.value() {
            HtmlNode::Element(_) => {
                if let Some(element_ref) = ElementRef::wrap(child) {
                    target.append_child(convert(element_ref));
                }
            }
            HtmlNode::Text(text) => {
                let content: &str = text;
                if !content.trim().is_empty() {
                    target.append_child(Node::Text(content.to_string()));
                }
            }
            _ => {}
        }
    }
}

fn convert(source: ElementRef<'_>) -> Element {
    let value = source.value();
    let mut element = Element::new(value.name());
    for (name, attr) in value.attrs() {
        element.set_attr(name, attr);
    }
    append_children(&mut element, source);
    element
}

/// Parses `source` and re-extracts it as normalized markup.
///
/// Returns the parser's error messages when the input is malformed.
pub fn normalize(source: &str) -> Result<String, Vec<String>> {
    let html = Html::parse_fragment(source);
    if !html.errors.is_empty() {
        return Err(html.errors.iter().map(|e| e.to_string()).collect());
    }
    Ok(html.root_element().inner_html())
}
