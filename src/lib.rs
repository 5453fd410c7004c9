pub mod config;
pub mod crawlers;
pub mod error;
pub mod output;
pub mod parsers;
pub mod results;
pub mod sitemap;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::CrawlerConfig;
pub use crawlers::{CrawlDelegate, CrawlReport, WebDriverCrawler};
pub use error::{CrawlError, ScrapeError};
pub use output::SplitMode;
pub use results::PageResult;

use std::future::Future;
use std::path::PathBuf;

/// Summary of a finished run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// URLs listed in the sitemap
    pub urls_found: usize,
    /// Pages crawled and files written; `None` when the sitemap yielded nothing
    pub report: Option<CrawlReport>,
}

/// Builder for scraping a site through its sitemap
pub struct SiteScrape {
    site: String,
    split: SplitMode,
    config: CrawlerConfig,
}

impl SiteScrape {
    /// Create a new builder for the site's base URL
    pub fn new(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            split: SplitMode::Combined,
            config: CrawlerConfig::default(),
        }
    }

    /// Set how pages are distributed over output files
    pub fn with_split(mut self, split: SplitMode) -> Self {
        self.split = split;
        self
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: CrawlerConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.output_dir)
    }

    /// Fetch the sitemap, crawl every page in a browser session and write the Markdown
    pub async fn run(self) -> Result<RunSummary, ScrapeError> {
        self.run_with(|config| async move { WebDriverCrawler::connect(&config).await })
            .await
    }

    /// Same as [`run`](Self::run), with the crawl session opened by `connect`.
    ///
    /// `connect` is only called when the sitemap lists at least one URL.
    pub async fn run_with<D, F, Fut>(self, connect: F) -> Result<RunSummary, ScrapeError>
    where
        D: CrawlDelegate,
        F: FnOnce(CrawlerConfig) -> Fut,
        Fut: Future<Output = Result<D, CrawlError>>,
    {
        let output_dir = self.output_dir();
        utils::ensure_directory_exists(&output_dir).map_err(|source| {
            error::OutputError::CreateDir {
                path: output_dir.clone(),
                source,
            }
        })?;

        let sitemap_url = utils::sitemap_url(&self.site);
        ::log::info!("Fetching URLs from sitemap: {}", sitemap_url);

        let client = reqwest::Client::builder()
            .timeout(self.config.request_timeout())
            .user_agent(self.config.user_agent.as_str())
            .build()
            .map_err(ScrapeError::HttpClient)?;

        let urls = sitemap::get_sitemap_urls(&client, &sitemap_url).await;
        if urls.is_empty() {
            ::log::info!("No URLs found to crawl");
            return Ok(RunSummary::default());
        }
        ::log::info!("Found {} URLs to crawl", urls.len());

        let site_name = utils::site_name(&self.site);
        let delegate = connect(self.config).await?;
        let report =
            crawlers::crawl_sequential(delegate, &urls, &output_dir, self.split, &site_name)
                .await?;

        Ok(RunSummary {
            urls_found: urls.len(),
            report: Some(report),
        })
    }
}
