use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::error::ScrapeError;
use crate::fetch::MarkupSource;

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());
static LEMMA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?&]lemma=([^&]+)").unwrap());

/// One verb on the listing page: display name and absolute detail-page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbLink {
    pub name: String,
    pub url: String,
}

/// Fetch the listing page and return its verb links, in document order.
/// A `debug_dump` path in the config receives the raw markup before parsing.
pub async fn fetch_verb_links<S: MarkupSource>(
    source: &S,
    cfg: &SiteConfig,
    limit: Option<usize>,
) -> Result<Vec<VerbLink>, ScrapeError> {
    info!("Fetching verb index: {}", cfg.index_url);
    let markup = source.markup(&cfg.index_url).await?;

    if let Some(path) = &cfg.debug_dump {
        match std::fs::write(path, &markup) {
            Ok(()) => info!("Saved listing markup to {}", path.display()),
            Err(e) => warn!("Could not write debug dump to {}: {}", path.display(), e),
        }
    }

    let links = extract_verb_links(&markup, &cfg.base_url, limit);
    info!("Verb links found: {}", links.len());
    Ok(links)
}

/// Select every anchor whose target carries a `lemma=` query parameter. No
/// de-duplication, no name filtering; order is document order. `limit`
/// truncates to the first N links.
pub fn extract_verb_links(markup: &str, base_url: &str, limit: Option<usize>) -> Vec<VerbLink> {
    let doc = Html::parse_document(markup);
    let mut links = Vec::new();

    for anchor in doc.select(&ANCHOR) {
        if let Some(max) = limit {
            if links.len() >= max {
                break;
            }
        }
        let href = match anchor.value().attr("href") {
            Some(h) => h,
            None => continue,
        };
        let lemma = match LEMMA_RE.captures(href) {
            Some(caps) => caps[1].to_string(),
            None => continue,
        };
        let name = anchor.text().collect::<String>().trim().to_string();
        debug!("index link: lemma={} name={}", lemma, name);
        links.push(VerbLink {
            name,
            url: absolute_url(base_url, href),
        });
    }

    links
}

/// Lemma value from a verb-detail URL, if it has one.
pub fn lemma_of(url: &str) -> Option<String> {
    LEMMA_RE.captures(url).map(|caps| caps[1].to_string())
}

fn absolute_url(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        href.trim_start_matches('/')
    )
}

// ── Tests ──
