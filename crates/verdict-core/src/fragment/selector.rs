//! Minimal CSS-style selectors for locating slots in a fragment.
//!
//! Supported: type selectors (`td`), classes (`.status`), compounds
//! (`td.status`), the universal selector (`*`), descendant (`a b`) and
//! child (`a > b`) combinators.

use super::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(input: &str) -> Self {
        let mut parts = input.split('.');
        let tag = parts
            .next()
            .filter(|t| !t.is_empty() && *t != "*")
            .map(str::to_lowercase);
        let classes = parts.filter(|c| !c.is_empty()).map(String::from).collect();
        Self { tag, classes }
    }

    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag() != tag {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

/// A parsed selector.
///
/// Parsing never fails; an empty selector matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Rightmost compound first.
    steps: Vec<(Compound, Combinator)>,
}

impl Selector {
    pub fn parse(input: &str) -> Self {
        let spaced = input.replace('>', " > ");
        let mut steps = Vec::new();
        let mut pending = Combinator::Descendant;

        for token in spaced.split_whitespace() {
            if token == ">" {
                pending = Combinator::Child;
                continue;
            }
            steps.push((Compound::parse(token), pending));
            pending = Combinator::Descendant;
        }

        // Each compound stores the combinator linking it to the one on its left.
        steps.reverse();
        Self { steps }
    }

    /// Whether `element`, reached through `ancestors` (outermost first), matches.
    pub fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        match self.steps.split_first() {
            Some(((compound, combinator), rest)) => {
                compound.matches(element) && Self::match_rest(rest, *combinator, ancestors)
            }
            None => false,
        }
    }

    fn match_rest(steps: &[(Compound, Combinator)], link: Combinator, ancestors: &[&Element]) -> bool {
        let Some(((compound, next_link), rest)) = steps.split_first() else {
            return true;
        };

        match link {
            Combinator::Child => match ancestors.split_last() {
                Some((parent, above)) => {
                    compound.matches(parent) && Self::match_rest(rest, *next_link, above)
                }
                None => false,
            },
            Combinator::Descendant => (0..ancestors.len()).rev().any(|i| {
                compound.matches(ancestors[i]) && Self::match_rest(rest, *next_link, &ancestors[..i])
            }),
        }
    }
}
