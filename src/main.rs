//! Sitegrep main entry point
//!
//! Command-line interface: crawl a site described by a TOML config, then
//! answer keyword queries against the index built during the crawl.

use anyhow::Context;
use clap::Parser;
use sitegrep::config::load_config;
use sitegrep::index::search;
use sitegrep::output::{format_failure, format_search_results};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitegrep: crawl a site and grep its text
///
/// Sitegrep walks every same-origin page reachable from a start URL, indexes
/// the plain text of each page, and reports which pages contain the queried
/// keywords as whole words (case-insensitive).
#[derive(Parser, Debug)]
#[command(name = "sitegrep")]
#[command(version)]
#[command(about = "Crawl a site and search its text", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Keyword to search for after the crawl (repeatable)
    #[arg(short = 'k', long = "query", value_name = "KEYWORD")]
    queries: Vec<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl_and_search(&config, &cli.queries).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegrep=info,warn"),
            1 => EnvFilter::new("sitegrep=debug,info"),
            2 => EnvFilter::new("sitegrep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &sitegrep::Config) {
    println!("=== Sitegrep Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Start URL: {}", config.crawler.start_url);
    println!(
        "  Scope base: {}",
        config
            .crawler
            .scope_base
            .as_deref()
            .unwrap_or("(start URL)")
    );
    println!("  Scope policy: {:?}", config.crawler.scope_policy);
    println!("  Max pages: {}", config.crawler.max_pages);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Request timeout: {}s", config.http.request_timeout);
    println!("  Connect timeout: {}s", config.http.connect_timeout);

    println!("\n✓ Configuration is valid");
}

/// Runs the crawl and then each requested query against the fresh index
async fn handle_crawl_and_search(
    config: &sitegrep::Config,
    queries: &[String],
) -> anyhow::Result<()> {
    let outcome = sitegrep::crawler::crawl(config).await?;

    tracing::info!(
        "Crawled {} pages ({} failures)",
        outcome.index.len(),
        outcome.failures.len()
    );

    if !outcome.failures.is_empty() {
        eprintln!("Failed fetches:");
        for failure in &outcome.failures {
            eprintln!("  {}", format_failure(failure));
        }
    }

    for keyword in queries {
        let results = search(&outcome.index, keyword)?;
        println!("Query: {}", keyword);
        println!("{}", format_search_results(&results));
    }

    Ok(())
}
