//! Runtime configuration for a crawl.

use std::path::PathBuf;

/// Settings for one crawl run. The defaults reproduce a plain
/// `ecom-crawler` invocation: local Chromedriver, headless browser, CSVs in
/// the current working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// WebDriver endpoint the browser session is started on.
    pub webdriver_url: String,
    /// Directory the per-category CSV files are written to.
    pub output_dir: PathBuf,
    /// Run the browser without a visible window.
    pub headless: bool,
    /// Pause after each "load more" click, giving the page time to append
    /// cards before visibility is re-checked.
    pub load_pause_ms: u64,
    /// Upper bound on "load more" clicks per category before the crawl gives
    /// up on the control ever disappearing.
    pub max_load_more_clicks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            output_dir: PathBuf::from("."),
            headless: true,
            load_pause_ms: 100,
            max_load_more_clicks: 100,
        }
    }
}
