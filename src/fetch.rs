use std::time::Duration;

use crate::error::ScrapeError;

/// The source site serves a simplified page to unknown clients; identify as a
/// desktop browser like the interactive exports were made with.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Anything that can turn a URL into raw page markup. The harvest loop and the
/// index fetch are generic over this so tests can substitute canned pages.
pub trait MarkupSource {
    async fn markup(&self, url: &str) -> Result<String, ScrapeError>;
}

/// HTTP-backed markup source. One client per run; no retries, no redirects
/// beyond reqwest's defaults, non-2xx surfaces as a fetch error.
pub struct PageClient {
    client: reqwest::Client,
}

impl PageClient {
    pub fn new(timeout: Duration) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::Config(format!("cannot build http client: {}", e)))?;
        Ok(PageClient { client })
    }
}

impl MarkupSource for PageClient {
    async fn markup(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::fetch(url, e))?
            .error_for_status()
            .map_err(|e| ScrapeError::fetch(url, e))?;
        response.text().await.map_err(|e| ScrapeError::fetch(url, e))
    }
}
