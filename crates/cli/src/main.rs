// ABOUTME: CLI for collecting, scoring, and exporting business leads.
// ABOUTME: Scrapes directory search results (or local HTML), runs the budget pipeline, writes CSV/JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use leadscout_leads::{write_csv_file, write_json_file, BudgetWindow, Lead, Pipeline};
use leadscout_yellowpages::YellowPagesScraper;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_QUERIES: &[&str] = &[
    "digital marketing",
    "marketing consultant",
    "startup consultant",
    "venture capital",
    "coworking space",
    "business accelerator",
];

/// Lead generation scraper for growth-minded local businesses.
#[derive(Parser, Debug)]
#[command(name = "leadscout")]
#[command(about = "Scrape directory listings and export leads within a budget window", long_about = None)]
struct Args {
    /// City to target.
    #[arg(long, default_value = "Philadelphia")]
    city: String,

    /// State/region abbreviation.
    #[arg(long, default_value = "PA")]
    state: String,

    /// Search query to run. Can be repeated; defaults to a built-in list.
    #[arg(short = 'q', long = "query")]
    queries: Vec<String>,

    /// Number of result pages to fetch per query.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    max_pages: u32,

    /// Minimum budget for filtering.
    #[arg(long, default_value_t = 3000)]
    budget_min: u32,

    /// Maximum budget for filtering.
    #[arg(long, default_value_t = 5000)]
    budget_max: u32,

    /// CSV file where leads will be stored.
    #[arg(short = 'o', long, default_value = "leads.csv")]
    output: PathBuf,

    /// Optional JSON export path.
    #[arg(long)]
    json_output: Option<PathBuf>,

    /// Include analytics and extra metadata in the JSON output.
    #[arg(long)]
    include_raw: bool,

    /// Parse saved result pages instead of fetching. Can be repeated.
    #[arg(long = "html")]
    html: Vec<PathBuf>,

    /// Pause between result pages of the same query, in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Directory host to query.
    #[arg(long, hide = true)]
    base_url: Option<String>,

    /// Log debug detail to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "leadscout=debug" } else { "leadscout=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_scraper(args: &Args) -> Result<YellowPagesScraper> {
    let mut builder = YellowPagesScraper::builder()
        .city(&args.city)
        .state(&args.state)
        .max_pages(args.max_pages)
        .page_delay(Duration::from_millis(args.delay_ms));
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(base_url);
    }
    Ok(builder.build()?)
}

fn queries(args: &Args) -> Vec<String> {
    if args.queries.is_empty() {
        DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect()
    } else {
        args.queries.clone()
    }
}

/// Runs every query, skipping (and logging) the ones that fail.
async fn scrape_leads(scraper: &YellowPagesScraper, queries: &[String]) -> Vec<Lead> {
    let mut leads = Vec::new();
    for query in queries {
        match scraper.fetch(query).await {
            Ok(found) => leads.extend(found),
            Err(err) => warn!(query = %query, error = %err, "query failed, skipping"),
        }
    }
    leads
}

/// Extracts leads from saved result pages, tagging each with its file name as the query.
fn load_html_leads(scraper: &YellowPagesScraper, paths: &[PathBuf]) -> Result<Vec<Lead>> {
    let mut leads = Vec::new();
    for path in paths {
        let html = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let page = scraper.parse_page(&html, &path.display().to_string());
        info!(
            file = %path.display(),
            listings = page.result_count,
            leads = page.leads.len(),
            "parsed saved page"
        );
        leads.extend(page.leads);
    }
    Ok(leads)
}

async fn run(args: Args) -> Result<()> {
    if args.budget_min > args.budget_max {
        bail!(
            "--budget-min ({}) must not exceed --budget-max ({})",
            args.budget_min,
            args.budget_max
        );
    }

    let scraper = build_scraper(&args)?;
    let raw = if args.html.is_empty() {
        scrape_leads(&scraper, &queries(&args)).await
    } else {
        load_html_leads(&scraper, &args.html)?
    };

    let pipeline = Pipeline::new(BudgetWindow::new(args.budget_min, args.budget_max));
    let (leads, _stats) = pipeline.run(raw);

    if leads.is_empty() {
        println!("No leads matched the requested filters.");
        return Ok(());
    }

    write_csv_file(&leads, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    if let Some(json_path) = &args.json_output {
        write_json_file(&leads, json_path, args.include_raw)
            .with_context(|| format!("failed to write {}", json_path.display()))?;
    }

    println!("Saved {} leads to {}", leads.len(), args.output.display());
    if let Some(json_path) = &args.json_output {
        println!("Saved JSON export to {}", json_path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
