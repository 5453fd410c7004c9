use clap::Parser;
use sitemap_scrape::{CrawlerConfig, SplitMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitemap-scrape")]
#[command(about = "Scrape a website through its sitemap and save the pages as Markdown files")]
#[command(version)]
pub struct Args {
    /// Base URL of the website to scrape (e.g. https://example.com)
    #[arg(long)]
    pub site: String,

    /// Split the output into N files; without a number every page gets its own file
    #[arg(
        long,
        num_args = 0..=1,
        default_value_t = 0,
        default_missing_value = "-1",
        allow_negative_numbers = true
    )]
    pub split: i64,

    /// Directory the Markdown files are written to
    #[arg(long)]
    pub output_dir: Option<String>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// WebDriver server URL (overrides WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Page load timeout in seconds
    #[arg(long)]
    pub page_timeout: Option<u64>,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headed: bool,
}

impl Args {
    pub fn split_mode(&self) -> SplitMode {
        SplitMode::from(self.split)
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_to(&self, mut config: CrawlerConfig) -> CrawlerConfig {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(url) = &self.webdriver_url {
            config.webdriver_url = url.clone();
        }
        if let Some(secs) = self.page_timeout {
            config.page_timeout_secs = secs;
        }
        if self.headed {
            config.headless = false;
        }
        config
    }
}
