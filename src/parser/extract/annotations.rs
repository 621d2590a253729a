use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::dom;
use crate::parser::sections::Section;

static ITALIC: LazyLock<Selector> = LazyLock::new(|| Selector::parse("i").unwrap());

/// One prefixed variant of the base verb, documented in the Anmerkung block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub prefix: String,
    pub examples: Vec<String>,
}

/// Prefixed-verb annotations: every italicized run in the Anmerkung cell is a
/// prefix candidate, and the first block quote after it supplies the example
/// sentences. Candidates without a prefix text or without examples are
/// dropped. If the markup interleaves prefixes and quotes out of order, the
/// pairing follows document order uncorrected.
pub fn extract(doc: &Html) -> Vec<Annotation> {
    let cell = match Section::Annotation.locate(doc) {
        Some(cell) => cell,
        None => return Vec::new(),
    };

    let mut annotations = Vec::new();
    for italic in cell.select(&ITALIC) {
        let prefix = dom::element_text(italic).trim().to_string();
        let examples = dom::next_element_after(doc, italic, "blockquote")
            .map(dom::text_lines)
            .unwrap_or_default();
        if !prefix.is_empty() && !examples.is_empty() {
            annotations.push(Annotation { prefix, examples });
        }
    }
    annotations
}

// ── Tests ──
