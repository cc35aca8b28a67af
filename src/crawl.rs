//! Page interactions and the per-category crawl loop.

use crate::browser::BrowsePage;
use crate::config::Config;
use crate::export;
use crate::store::catalog::Category;
use crate::store::models::Product;
use crate::store::selectors;
use crate::store::{parser, ScrapeError};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, info};

/// Crawls every catalog category in order and writes one CSV per category.
///
/// Categories are not isolated from each other: the first failure aborts the
/// run, leaving later categories unprocessed and their files unwritten.
pub async fn run(page: &mut impl BrowsePage, config: &Config) -> Result<()> {
    for category in Category::all() {
        info!("scraping category: {category}");

        let products = scrape_category(page, *category, config)
            .await
            .with_context(|| format!("failed to scrape category `{category}`"))?;

        let path = config.output_dir.join(category.csv_name());
        export::write_products(&path, &products)?;
        info!("wrote {} products to {}", products.len(), path.display());
    }

    Ok(())
}

/// Scrapes one category: navigate, dismiss the cookie banner, expand the
/// listing, parse every card from the rendered page.
pub async fn scrape_category(
    page: &mut impl BrowsePage,
    category: Category,
    config: &Config,
) -> Result<Vec<Product>> {
    page.goto(&category.url()).await?;
    accept_cookies(page).await?;
    expand_listing(page, config).await?;

    let html = page.source().await?;
    parser::parse_listing(&html)
}

/// Dismisses the cookie-consent banner when it is present. Pages without the
/// banner are left untouched.
pub async fn accept_cookies(page: &mut impl BrowsePage) -> Result<()> {
    if page.click_if_present(selectors::COOKIE_ACCEPT).await? {
        debug!("dismissed cookie banner");
    }
    Ok(())
}

/// Clicks the "load more" control until it is no longer visible, so every
/// card in the category is rendered. Categories without the control complete
/// immediately with zero clicks.
///
/// Returns the number of clicks performed. A control that is still visible
/// after `max_load_more_clicks` clicks fails with
/// [`ScrapeError::LoadMoreStuck`] rather than looping forever.
pub async fn expand_listing(page: &mut impl BrowsePage, config: &Config) -> Result<u32> {
    let mut clicks = 0;
    while let Some(true) = page.is_displayed(selectors::LOAD_MORE).await? {
        if clicks >= config.max_load_more_clicks {
            return Err(ScrapeError::LoadMoreStuck { clicks }.into());
        }

        page.click(selectors::LOAD_MORE).await?;
        clicks += 1;
        // Let the page append the next batch of cards before re-checking.
        tokio::time::sleep(Duration::from_millis(config.load_pause_ms)).await;
    }

    debug!("listing fully expanded after {clicks} clicks");
    Ok(clicks)
}
