use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::ConjugationLayout;
use crate::fetch::MarkupSource;
use crate::index::VerbLink;
use crate::parser;
use crate::parser::extract;
use crate::sink::VerbRecord;

/// One verb that did not make it into the dataset, with the reason it was
/// skipped.
#[derive(Debug, Clone)]
pub struct VerbFailure {
    pub verb: String,
    pub reason: String,
}

/// Outcome of a harvest run: assembled records in verb-index order, plus the
/// side list of skipped verbs.
pub struct HarvestReport {
    pub records: Vec<VerbRecord>,
    pub failures: Vec<VerbFailure>,
}

/// Walk the verb index strictly in order, one page at a time. A fetch or
/// parse error drops that verb, is logged once, and the loop moves on; the
/// run itself never aborts over a single page. The delay throttles requests
/// against the source site and is applied after successful pages only.
pub async fn harvest<S: MarkupSource>(
    source: &S,
    links: &[VerbLink],
    layout: &ConjugationLayout,
    delay: Duration,
) -> Result<HarvestReport> {
    let progress = ProgressBar::new(links.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut records = Vec::new();
    let mut failures = Vec::new();

    for link in links {
        progress.set_message(link.name.clone());

        let markup = match source.markup(&link.url).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!("Skipping {}: {}", link.name, e);
                failures.push(VerbFailure {
                    verb: link.name.clone(),
                    reason: e.to_string(),
                });
                progress.inc(1);
                continue;
            }
        };

        let parsed = match parser::parse_verb_page(&link.name, &markup, layout) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Skipping {}: {}", link.name, e);
                failures.push(VerbFailure {
                    verb: link.name.clone(),
                    reason: e.to_string(),
                });
                progress.inc(1);
                continue;
            }
        };

        records.push(extract::assemble(&parsed));
        progress.inc(1);

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    progress.finish_and_clear();
    info!(
        "Harvested {} verbs ({} skipped)",
        records.len(),
        failures.len()
    );

    Ok(HarvestReport { records, failures })
}

// ── Tests ──
