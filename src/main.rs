mod config;
mod error;
mod fetch;
mod index;
mod parser;
mod scrape;
mod sink;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use config::SiteConfig;
use fetch::{MarkupSource, PageClient};

#[derive(Parser)]
#[command(name = "verb_scraper", about = "German verb dataset scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SiteArgs {
    /// Base URL joined onto relative verb links
    #[arg(long)]
    base_url: String,
    /// Listing page URL (defaults to the base URL)
    #[arg(long)]
    index_url: Option<String>,
    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
    /// Save the raw listing page markup to this file
    #[arg(long)]
    debug_dump: Option<PathBuf>,
}

impl SiteArgs {
    fn into_config(self) -> SiteConfig {
        SiteConfig::new(
            self.base_url,
            self.index_url,
            Duration::from_secs(self.timeout),
            self.debug_dump,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the verbs on the index page without scraping them
    List {
        #[command(flatten)]
        site: SiteArgs,
        /// Max verbs to list (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Scrape every verb and write the CSV dataset
    Run {
        #[command(flatten)]
        site: SiteArgs,
        /// Max verbs to scrape (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Output CSV path
        #[arg(short, long, default_value = "all_german_verbs.csv")]
        out: PathBuf,
        /// Pause between verb pages, in milliseconds
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
        /// Conjugation table layout file (TOML)
        #[arg(long)]
        layout: Option<PathBuf>,
    },
    /// Fetch one verb page and print its parsed record
    Show {
        /// Verb detail page URL
        url: String,
        /// Verb name (default: the lemma from the URL)
        #[arg(long)]
        name: Option<String>,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,
        /// Conjugation table layout file (TOML)
        #[arg(long)]
        layout: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { site, limit } => {
            let cfg = site.into_config();
            let client = PageClient::new(cfg.timeout)?;
            let links = index::fetch_verb_links(&client, &cfg, limit).await?;
            if links.is_empty() {
                println!("No verb links found on {}", cfg.index_url);
                return Ok(());
            }
            for (i, link) in links.iter().enumerate() {
                println!("{:>4}  {:<24} {}", i + 1, link.name, link.url);
            }
            println!("\n{} verbs", links.len());
            Ok(())
        }
        Commands::Run {
            site,
            limit,
            out,
            delay_ms,
            layout,
        } => {
            let cfg = site.into_config();
            let layout = config::load_layout(layout.as_deref())?;
            let client = PageClient::new(cfg.timeout)?;

            let links = index::fetch_verb_links(&client, &cfg, limit).await?;
            if links.is_empty() {
                println!(
                    "No verb links found on {}. Check --base-url/--index-url.",
                    cfg.index_url
                );
                return Ok(());
            }

            println!("Scraping {} verbs...", links.len());
            let report = scrape::harvest(
                &client,
                &links,
                &layout,
                Duration::from_millis(delay_ms),
            )
            .await?;

            sink::write_csv(&out, &report.records)?;
            println!(
                "Completed! Saved {} verbs to {}",
                report.records.len(),
                out.display()
            );
            if !report.failures.is_empty() {
                println!("{} verbs skipped:", report.failures.len());
                for failure in &report.failures {
                    println!("  {}: {}", failure.verb, failure.reason);
                }
            }
            Ok(())
        }
        Commands::Show {
            url,
            name,
            timeout,
            layout,
        } => {
            let layout = config::load_layout(layout.as_deref())?;
            let client = PageClient::new(Duration::from_secs(timeout))?;
            let name = name
                .or_else(|| index::lemma_of(&url))
                .unwrap_or_else(|| "unbekannt".into());

            let markup = client.markup(&url).await?;
            let parsed = parser::parse_verb_page(&name, &markup, &layout)?;
            let record = parser::extract::assemble(&parsed);

            println!("verb:        {}", record.verb);
            println!("present:     {}", record.conjugations_present);
            println!("past:        {}", record.conjugations_past);
            println!("perfect:     {}", record.conjugations_perfect);
            println!("imperative:  {}", record.conjugations_imperative);
            println!("structures:  {}", record.structures);
            println!("wortfamilie: {}", record.wortfamilie);
            println!("prefixes:    {}", record.prefix_verbs);
            if !parsed.examples.is_empty() {
                println!("beispiele:");
                for example in &parsed.examples {
                    if example.explanation.is_empty() {
                        println!("  {}", example.text);
                    } else {
                        println!("  {} ({})", example.text, example.explanation);
                    }
                }
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
