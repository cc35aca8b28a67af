//! ecom-crawler - scrapes the webscraper.io e-commerce demo into CSV files.
//!
//! Drives a real browser over WebDriver: for each of the site's six product
//! categories it dismisses the cookie banner, clicks "load more" until every
//! card is rendered, parses the cards, and writes one CSV per category.

pub mod browser;
pub mod config;
pub mod crawl;
pub mod export;
pub mod store;

pub use config::Config;
pub use store::models::Product;
pub use store::ScrapeError;
