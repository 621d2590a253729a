use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::{CellLocator, ConjugationLayout};
use crate::error::ScrapeError;
use crate::parser::dom;

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// The four conjugation forms of one verb. Each list carries at most one
/// entry under the single-cell layout; an empty list means "not on the page".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConjugationSet {
    pub present: Vec<String>,
    pub past: Vec<String>,
    pub perfect: Vec<String>,
    pub imperative: Vec<String>,
}

/// Read the four labeled cells out of the conjugation table. Any missing
/// table, row, or cell is a structure mismatch naming what was absent, so
/// layout drift fails loudly instead of extracting a neighboring field.
pub fn extract(doc: &Html, layout: &ConjugationLayout) -> Result<ConjugationSet, ScrapeError> {
    let table = doc.select(&TABLE).nth(layout.table_index).ok_or_else(|| {
        ScrapeError::mismatch(format!(
            "conjugation table missing: expected table #{}, page has {}",
            layout.table_index,
            doc.select(&TABLE).count()
        ))
    })?;
    let rows: Vec<_> = table.select(&TR).collect();

    let cell_text = |label: &str, loc: &CellLocator| -> Result<String, ScrapeError> {
        let row = rows.get(loc.row).ok_or_else(|| {
            ScrapeError::mismatch(format!(
                "{}: row {} missing, table has {} rows",
                label,
                loc.row,
                rows.len()
            ))
        })?;
        let cell = row.select(&TD).nth(loc.col).ok_or_else(|| {
            ScrapeError::mismatch(format!("{}: cell {} missing in row {}", label, loc.col, loc.row))
        })?;
        Ok(dom::element_text(cell).trim().to_string())
    };

    Ok(ConjugationSet {
        present: vec![cell_text("present", &layout.present)?],
        past: vec![cell_text("past", &layout.past)?],
        perfect: vec![cell_text("perfect", &layout.perfect)?],
        imperative: vec![cell_text("imperative", &layout.imperative)?],
    })
}

// ── Tests ──
