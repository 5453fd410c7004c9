use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching or parsing a sitemap
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Sitemap {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid sitemap XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed sitemap: {0}")]
    Malformed(String),
}

/// Errors raised by a crawl delegate
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Could not open a WebDriver session (tried {tried})")]
    Session { tried: String },

    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    #[error("Timed out after {secs}s loading {url}")]
    Timeout { url: String, secs: u64 },
}

/// Errors raised while writing output files
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fatal errors for a whole scrape run
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error(transparent)]
    Crawl(#[from] CrawlError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
