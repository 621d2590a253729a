use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ScrapeError;

/// Layout schema understood by this build. A layout file with a different
/// version is rejected at startup instead of silently extracting wrong cells.
pub const LAYOUT_SCHEMA_VERSION: u32 = 1;

/// Site endpoints and request policy, supplied explicitly on the command line.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Prefix joined onto relative verb links from the listing page.
    pub base_url: String,
    /// Listing page to pull the verb index from.
    pub index_url: String,
    pub timeout: Duration,
    /// Raw listing markup is written here once per run, for selector drift diagnosis.
    pub debug_dump: Option<PathBuf>,
}

impl SiteConfig {
    pub fn new(
        base_url: String,
        index_url: Option<String>,
        timeout: Duration,
        debug_dump: Option<PathBuf>,
    ) -> Self {
        let index_url = index_url.unwrap_or_else(|| base_url.clone());
        SiteConfig {
            base_url,
            index_url,
            timeout,
            debug_dump,
        }
    }
}

/// Zero-based position of one conjugation form inside the table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CellLocator {
    pub row: usize,
    pub col: usize,
}

/// Maps each semantic conjugation label to a table cell. The defaults mirror
/// the source site's layout: forms live in the second table, imperative and
/// present in the third row, past and perfect in the fifth.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConjugationLayout {
    pub schema_version: u32,
    /// Zero-based index of the conjugation table among all tables on the page.
    pub table_index: usize,
    pub present: CellLocator,
    pub past: CellLocator,
    pub perfect: CellLocator,
    pub imperative: CellLocator,
}

impl Default for ConjugationLayout {
    fn default() -> Self {
        ConjugationLayout {
            schema_version: LAYOUT_SCHEMA_VERSION,
            table_index: 1,
            present: CellLocator { row: 2, col: 1 },
            imperative: CellLocator { row: 2, col: 0 },
            past: CellLocator { row: 4, col: 0 },
            perfect: CellLocator { row: 4, col: 1 },
        }
    }
}

impl ConjugationLayout {
    pub fn from_file(path: &Path) -> Result<Self, ScrapeError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ScrapeError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&text)
            .map_err(|e| ScrapeError::Config(format!("bad layout file {}: {}", path.display(), e)))
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.schema_version != LAYOUT_SCHEMA_VERSION {
            return Err(ScrapeError::Config(format!(
                "unsupported layout schema version {} (this build expects {})",
                self.schema_version, LAYOUT_SCHEMA_VERSION
            )));
        }
        Ok(())
    }
}

/// Load the cell layout from a file, or fall back to the built-in defaults.
/// Validated either way before any page is fetched.
pub fn load_layout(path: Option<&Path>) -> Result<ConjugationLayout, ScrapeError> {
    let layout = match path {
        Some(p) => ConjugationLayout::from_file(p)?,
        None => ConjugationLayout::default(),
    };
    layout.validate()?;
    Ok(layout)
}

// ── Tests ──
