//! Document-order lookup helpers shared by the section extractors.
//!
//! The source pages anchor every section on an exact heading text and the
//! markup element that follows it, so the primitives here are "find heading"
//! and "first element of a given kind after this node".

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static H4: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h4").unwrap());

/// Heading element whose exact trimmed text equals `marker`.
pub fn find_heading<'a>(doc: &'a Html, marker: &str) -> Option<ElementRef<'a>> {
    doc.select(&H4)
        .find(|h| element_text(*h).trim() == marker)
}

/// First element named `name` that comes after `after` in document order.
/// Descendants of `after` count as "after", matching a preorder walk.
pub fn next_element_after<'a>(
    doc: &'a Html,
    after: ElementRef<'_>,
    name: &str,
) -> Option<ElementRef<'a>> {
    let mut seen = false;
    for node in doc.root_element().descendants() {
        if node.id() == after.id() {
            seen = true;
            continue;
        }
        if !seen {
            continue;
        }
        if let Some(el) = ElementRef::wrap(node) {
            if el.value().name() == name {
                return Some(el);
            }
        }
    }
    None
}

/// All descendant text of an element, concatenated.
pub fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>()
}

/// Descendant text split at node boundaries: one entry per text node, trimmed,
/// blanks dropped. This is the semantic line split: `<br>` and inline tags
/// break lines, literal whitespace does not.
pub fn text_lines(el: ElementRef) -> Vec<String> {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ── Tests ──
