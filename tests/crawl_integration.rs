//! End-to-end crawl tests against a scripted browser session.

use anyhow::Result;
use async_trait::async_trait;
use ecom_crawler::browser::BrowsePage;
use ecom_crawler::config::Config;
use ecom_crawler::crawl;
use ecom_crawler::store::catalog::Category;
use std::collections::HashMap;
use tempfile::tempdir;

const LISTING_FIXTURE: &str = include_str!("fixtures/listing_page.html");
const MISSING_PRICE_FIXTURE: &str = include_str!("fixtures/listing_page_missing_price.html");

const EXPECTED_CSV: &str = "title,description,price,rating,num_of_reviews\n\
                            A,d1,9.99,3,12\n\
                            B,d2,14.5,5,0\n\
                            C,d3,0.01,0,999\n";

/// Serves a canned page source per URL; the cookie banner shows on the first
/// page only and every listing needs two "load more" clicks.
struct MockBrowser {
    pages: HashMap<String, String>,
    current: String,
    cookie_banner_up: bool,
    load_more_left: u32,
}

impl MockBrowser {
    fn new(pages: HashMap<String, String>) -> Self {
        Self { pages, current: String::new(), cookie_banner_up: true, load_more_left: 0 }
    }

    fn serving_all_categories(html: &str) -> Self {
        let pages =
            Category::all().iter().map(|c| (c.url(), html.to_string())).collect();
        Self::new(pages)
    }
}

#[async_trait]
impl BrowsePage for MockBrowser {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.current = self
            .pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("navigation to {url} failed"))?;
        self.load_more_left = 2;
        Ok(())
    }

    async fn click_if_present(&mut self, _css: &str) -> Result<bool> {
        if self.cookie_banner_up {
            self.cookie_banner_up = false;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn is_displayed(&mut self, _css: &str) -> Result<Option<bool>> {
        Ok(Some(self.load_more_left > 0))
    }

    async fn click(&mut self, _css: &str) -> Result<()> {
        self.load_more_left = self.load_more_left.saturating_sub(1);
        Ok(())
    }

    async fn source(&mut self) -> Result<String> {
        Ok(self.current.clone())
    }
}

fn test_config(out_dir: &std::path::Path) -> Config {
    Config { output_dir: out_dir.to_path_buf(), load_pause_ms: 0, ..Config::default() }
}

#[tokio::test]
async fn test_full_run_writes_all_category_files() {
    let dir = tempdir().unwrap();
    let mut browser = MockBrowser::serving_all_categories(LISTING_FIXTURE);

    crawl::run(&mut browser, &test_config(dir.path())).await.unwrap();

    for category in Category::all() {
        let content = std::fs::read_to_string(dir.path().join(category.csv_name())).unwrap();
        assert_eq!(content, EXPECTED_CSV, "unexpected contents for {category}");
    }
}

#[tokio::test]
async fn test_failing_category_aborts_later_ones() {
    let dir = tempdir().unwrap();

    // Third category serves a card without a price element
    let mut pages: HashMap<String, String> =
        Category::all().iter().map(|c| (c.url(), LISTING_FIXTURE.to_string())).collect();
    pages.insert(Category::Laptops.url(), MISSING_PRICE_FIXTURE.to_string());

    // A file left over from an earlier run must survive the aborted one
    let stale = dir.path().join(Category::Tablets.csv_name());
    std::fs::write(&stale, "stale contents").unwrap();

    let mut browser = MockBrowser::new(pages);
    let err = crawl::run(&mut browser, &test_config(dir.path())).await.unwrap_err();
    assert!(format!("{err:#}").contains("laptops"));

    // Categories before the failure were written in full
    for done in [Category::Home, Category::Computers] {
        let content = std::fs::read_to_string(dir.path().join(done.csv_name())).unwrap();
        assert_eq!(content, EXPECTED_CSV);
    }

    // The failing category produced no file at all
    assert!(!dir.path().join(Category::Laptops.csv_name()).exists());

    // Later categories never ran; the stale file is untouched
    assert_eq!(std::fs::read_to_string(&stale).unwrap(), "stale contents");
    assert!(!dir.path().join(Category::Phones.csv_name()).exists());
    assert!(!dir.path().join(Category::Touch.csv_name()).exists());
}

#[tokio::test]
async fn test_navigation_failure_aborts_run() {
    let dir = tempdir().unwrap();

    // Only the first category resolves; the second navigation fails
    let mut pages = HashMap::new();
    pages.insert(Category::Home.url(), LISTING_FIXTURE.to_string());

    let mut browser = MockBrowser::new(pages);
    let err = crawl::run(&mut browser, &test_config(dir.path())).await.unwrap_err();
    assert!(format!("{err:#}").contains("computers"));

    assert!(dir.path().join(Category::Home.csv_name()).exists());
    assert!(!dir.path().join(Category::Computers.csv_name()).exists());
}
