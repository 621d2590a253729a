//! The detail pages carry four annotated sections, each introduced by a
//! heading with a fixed German title. Each section kind owns exactly one
//! locator strategy; a missing heading yields `None` and the caller's empty
//! value, never an error.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::dom;

static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Structures,
    Examples,
    Annotation,
    WordFamily,
}

impl Section {
    pub fn marker(self) -> &'static str {
        match self {
            Section::Structures => "Strukturen",
            Section::Examples => "Beispiele",
            Section::Annotation => "Anmerkung",
            Section::WordFamily => "Wortfamilie",
        }
    }

    /// Content cell of this section. Structures sit in the row after their
    /// heading (first cell of the next `tr`); the other sections use the next
    /// `td` in document order.
    pub fn locate(self, doc: &Html) -> Option<ElementRef<'_>> {
        let heading = dom::find_heading(doc, self.marker())?;
        match self {
            Section::Structures => {
                let row = dom::next_element_after(doc, heading, "tr")?;
                row.select(&TD).next()
            }
            _ => dom::next_element_after(doc, heading, "td"),
        }
    }
}

// ── Tests ──
