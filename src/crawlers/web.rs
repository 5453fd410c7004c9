use crate::config::CrawlerConfig;
use crate::crawlers::CrawlDelegate;
use crate::error::CrawlError;
use crate::parsers::{ConvertedPage, Parser};
use crate::results::PageResult;
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder};
use std::time::{Duration, Instant};
use tokio::time::timeout;

// Tried in order when the configured WebDriver URL does not answer
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444",
];

/// Crawl delegate backed by a single WebDriver browser session
pub struct WebDriverCrawler {
    client: Client,
    page_timeout: Duration,
}

impl WebDriverCrawler {
    /// Opens the browser session used for every subsequent crawl
    pub async fn connect(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        let capabilities = browser_capabilities(config);
        let client = connect_to_webdriver(&config.webdriver_url, capabilities).await?;

        Ok(Self {
            client,
            page_timeout: config.page_timeout(),
        })
    }

    /// Loads the page and converts its source
    async fn scrape(&self, url: &str) -> Result<ConvertedPage, CrawlError> {
        let start = Instant::now();
        ::log::debug!("SCRAPE: {}", url);

        self.client
            .goto(url)
            .await
            .map_err(|e| navigation_error(e, "accessing", url))?;

        let source = self
            .client
            .source()
            .await
            .map_err(|e| navigation_error(e, "getting source for", url))?;

        let page = Parser::convert_from_url(&source, url);
        ::log::debug!(
            "Processed {} in {:.2} seconds",
            url,
            start.elapsed().as_secs_f64()
        );
        Ok(page)
    }
}

impl CrawlDelegate for WebDriverCrawler {
    async fn crawl(&mut self, url: &str) -> PageResult {
        let result = match timeout(self.page_timeout, self.scrape(url)).await {
            Ok(result) => result,
            Err(_) => Err(CrawlError::Timeout {
                url: url.to_string(),
                secs: self.page_timeout.as_secs(),
            }),
        };

        match result {
            Ok(page) => PageResult::success(url, page.title, page.markdown),
            Err(e) => PageResult::failure(url, e.to_string()),
        }
    }

    async fn close(self) {
        match self.client.close().await {
            Ok(()) => ::log::debug!("Closed WebDriver session"),
            Err(e) => ::log::warn!("Failed to close WebDriver session: {}", e),
        }
    }
}

/// Chrome capabilities carrying the configured browser flags
pub fn browser_capabilities(config: &CrawlerConfig) -> Capabilities {
    let mut capabilities = Capabilities::new();
    capabilities.insert(
        "goog:chromeOptions".to_string(),
        serde_json::json!({ "args": config.effective_browser_args() }),
    );
    capabilities
}

/// Connects to the WebDriver instance, falling back to common local ports
async fn connect_to_webdriver(
    webdriver_url: &str,
    capabilities: Capabilities,
) -> Result<Client, CrawlError> {
    let mut builder = ClientBuilder::native();
    builder.capabilities(capabilities);

    match builder.connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
        }
    }

    let mut tried = vec![webdriver_url.to_string()];
    for url in FALLBACK_WEBDRIVER_URLS {
        if url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = builder.connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
        tried.push(url.to_string());
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(CrawlError::Session {
        tried: tried.join(", "),
    })
}

/// Maps a WebDriver command error for one page
fn navigation_error(error: fantoccini::error::CmdError, context: &str, url: &str) -> CrawlError {
    let message = error.to_string();
    if message.contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while {} {}", context, url);
    }
    CrawlError::Navigation {
        url: url.to_string(),
        message: format!("{context}: {message}"),
    }
}
