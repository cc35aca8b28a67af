//! WebDriver session handling.
//!
//! [`BrowsePage`] is the seam between the crawl logic and the live browser;
//! tests substitute a mock, production uses [`WebSession`] against a running
//! Chromedriver.

use anyhow::{Context, Result};
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use tracing::debug;
use fantoccini::error::ErrorStatus;
use webdriver::capabilities::Capabilities;

/// Page-level operations the crawler needs from a browser.
///
/// "Element not found" is anticipated for some controls, so the lookup
/// methods report absence as a value instead of an error.
#[async_trait]
pub trait BrowsePage: Send {
    /// Navigates to `url` and waits for the document to load.
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// Clicks the first element matching `css` if one exists. Returns whether
    /// a click happened.
    async fn click_if_present(&mut self, css: &str) -> Result<bool>;

    /// Visibility of the first element matching `css`, or `None` when no such
    /// element exists.
    async fn is_displayed(&mut self, css: &str) -> Result<Option<bool>>;

    /// Clicks the first element matching `css`; the element must exist.
    async fn click(&mut self, css: &str) -> Result<()>;

    /// Full HTML source of the current page.
    async fn source(&mut self) -> Result<String>;
}

/// Live browser session backed by a WebDriver service.
pub struct WebSession {
    client: Client,
}

impl WebSession {
    /// Starts a browser session against the WebDriver endpoint.
    pub async fn connect(webdriver_url: &str, headless: bool) -> Result<Self> {
        let mut args = vec!["--disable-gpu", "--window-size=1920,1080"];
        if headless {
            args.push("--headless");
        }

        let mut caps = Capabilities::new();
        caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await
            .with_context(|| format!("failed to connect to WebDriver at {webdriver_url}"))?;

        Ok(Self { client })
    }

    /// Closes the browser window and ends the WebDriver session.
    pub async fn close(self) -> Result<()> {
        self.client.close().await.context("failed to close browser session")
    }

    async fn find_optional(&self, css: &str) -> Result<Option<Element>> {
        match self.client.find(Locator::Css(css)).await {
            Ok(element) => Ok(Some(element)),
            Err(CmdError::Standard(ref e)) if e.error == ErrorStatus::NoSuchElement => Ok(None),
            Err(e) => Err(e).with_context(|| format!("lookup of `{css}` failed")),
        }
    }
}

#[async_trait]
impl BrowsePage for WebSession {
    async fn goto(&mut self, url: &str) -> Result<()> {
        debug!("GET {url}");
        self.client.goto(url).await.with_context(|| format!("failed to load {url}"))
    }

    async fn click_if_present(&mut self, css: &str) -> Result<bool> {
        match self.find_optional(css).await? {
            Some(element) => {
                element.click().await.with_context(|| format!("failed to click `{css}`"))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn is_displayed(&mut self, css: &str) -> Result<Option<bool>> {
        match self.find_optional(css).await? {
            Some(element) => {
                let displayed = element
                    .is_displayed()
                    .await
                    .with_context(|| format!("visibility check of `{css}` failed"))?;
                Ok(Some(displayed))
            }
            None => Ok(None),
        }
    }

    async fn click(&mut self, css: &str) -> Result<()> {
        let element = self
            .client
            .find(Locator::Css(css))
            .await
            .with_context(|| format!("no element matching `{css}` to click"))?;
        element.click().await.with_context(|| format!("failed to click `{css}`"))
    }

    async fn source(&mut self) -> Result<String> {
        self.client.source().await.context("failed to read page source")
    }
}
