//! The rendered fragment tree.

use super::selector::Selector;

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Plain text, escaped on output.
    Text(String),
    /// Trusted markup, emitted verbatim.
    Markup(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element in a rendered fragment.
///
/// Classes are kept apart from other attributes so they can be added
/// one at a time without reparsing the `class` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            ..Default::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds each whitespace-separated class not already present.
    pub fn add_class(&mut self, classes: &str) -> &mut Self {
        for class in classes.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        if name == "class" {
            return None;
        }
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sets an attribute, replacing any previous value.
    ///
    /// `class` is routed through [`Element::add_class`].
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if name == "class" {
            return self.add_class(&value);
        }
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_string(), value)),
        }
        self
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.clear();
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Appends trusted markup after the existing children.
    pub fn append_markup(&mut self, markup: impl Into<String>) -> &mut Self {
        self.children.push(Node::Markup(markup.into()));
        self
    }

    pub fn append_child(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct children that are elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Concatenated text of all descendants. Markup contributes its source.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(out),
                Node::Text(text) | Node::Markup(text) => out.push_str(text),
            }
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// First element matching `selector` in document order, self included.
    pub fn select_first(&self, selector: &str) -> Option<&Element> {
        let selector = Selector::parse(selector);
        let path = self.find_path(&selector)?;
        self.element_at(&path)
    }

    pub fn select_first_mut(&mut self, selector: &str) -> Option<&mut Element> {
        let selector = Selector::parse(selector);
        let path = self.find_path(&selector)?;
        self.element_at_mut(&path)
    }

    /// All elements matching `selector` in document order, self included.
    pub fn select(&self, selector: &str) -> Vec<&Element> {
        let selector = Selector::parse(selector);
        let mut found = Vec::new();
        let mut ancestors = Vec::new();
        self.collect_matches(&selector, &mut ancestors, &mut found);
        found
    }

    fn collect_matches<'a>(
        &'a self,
        selector: &Selector,
        ancestors: &mut Vec<&'a Element>,
        found: &mut Vec<&'a Element>,
    ) {
        if selector.matches(self, ancestors) {
            found.push(self);
        }
        ancestors.push(self);
        for child in self.child_elements() {
            child.collect_matches(selector, ancestors, found);
        }
        ancestors.pop();
    }

    /// Child-index path from `self` to the first match.
    fn find_path(&self, selector: &Selector) -> Option<Vec<usize>> {
        let mut ancestors = Vec::new();
        let mut path = Vec::new();
        if self.search(selector, &mut ancestors, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn search<'a>(
        &'a self,
        selector: &Selector,
        ancestors: &mut Vec<&'a Element>,
        path: &mut Vec<usize>,
    ) -> bool {
        if selector.matches(self, ancestors) {
            return true;
        }
        ancestors.push(self);
        for (index, child) in self.children.iter().enumerate() {
            if let Node::Element(element) = child {
                path.push(index);
                if element.search(selector, ancestors, path) {
                    ancestors.pop();
                    return true;
                }
                path.pop();
            }
        }
        ancestors.pop();
        false
    }

    fn element_at(&self, path: &[usize]) -> Option<&Element> {
        let mut current = self;
        for &index in path {
            current = match current.children.get(index)? {
                Node::Element(element) => element,
                _ => return None,
            };
        }
        Some(current)
    }

    fn element_at_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let mut current = self;
        for &index in path {
            current = match current.children.get_mut(index)? {
                Node::Element(element) => element,
                _ => return None,
            };
        }
        Some(current)
    }
}
