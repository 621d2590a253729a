use thiserror::Error;

/// Errors that can stop work on a single verb. `Fetch` and `StructureMismatch`
/// are caught at the per-verb boundary in the harvest loop; `Config` aborts
/// before any page is touched.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("page structure mismatch: {0}")]
    StructureMismatch(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ScrapeError {
    pub fn fetch(url: impl Into<String>, reason: impl ToString) -> Self {
        ScrapeError::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn mismatch(what: impl Into<String>) -> Self {
        ScrapeError::StructureMismatch(what.into())
    }
}
