//! HTML page assembly for compiled tests.
//!
//! The page skeleton lives in `templates/page.html` and is embedded at
//! compile time using `include_str!`. Placeholders:
//! - `{{TITLE}}` - report title
//! - `{{TESTS}}` - serialized test fragments

use verdict_core::fragment::html_escape;
use verdict_core::Element;

const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Render the report page around the compiled top-level tests.
pub fn render_page(title: &str, tests: &[Element]) -> String {
    let items: Vec<String> = tests.iter().map(Element::to_html).collect();

    PAGE_TEMPLATE
        .replace("{{TITLE}}", &html_escape(title))
        .replace("{{TESTS}}", &items.join("\n"))
}
