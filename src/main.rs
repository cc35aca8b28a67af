//! ecom-crawler - scrapes the webscraper.io e-commerce demo into CSV files.

use anyhow::Result;
use clap::Parser;
use ecom_crawler::browser::WebSession;
use ecom_crawler::config::Config;
use ecom_crawler::crawl;
use std::path::PathBuf;
use tracing::{warn, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ecom-crawler",
    version,
    about = "Scrapes the webscraper.io e-commerce demo site into per-category CSV files",
    long_about = "Drives a browser through the demo site's six product categories, expands \
                  every listing via its \"load more\" control, and writes one CSV per category."
)]
struct Cli {
    /// WebDriver endpoint (a running Chromedriver)
    #[arg(long, default_value = "http://localhost:9515")]
    webdriver: String,

    /// Directory to write the CSV files to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Show the browser window while scraping
    #[arg(long)]
    headed: bool,

    /// Pause after each "load more" click, in milliseconds
    #[arg(long, default_value = "100")]
    load_pause: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = Config {
        webdriver_url: cli.webdriver,
        output_dir: cli.out_dir,
        headless: !cli.headed,
        load_pause_ms: cli.load_pause,
        ..Config::default()
    };

    let mut session = WebSession::connect(&config.webdriver_url, config.headless).await?;

    // The session is released on both exit paths; a teardown failure must not
    // mask the crawl's own error.
    let outcome = crawl::run(&mut session, &config).await;
    if let Err(e) = session.close().await {
        warn!("failed to close browser session: {e:#}");
    }

    outcome
}
