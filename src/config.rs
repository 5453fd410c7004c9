use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for a sitemap scrape run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrawlerConfig {
    /// URL of the WebDriver server driving the browser
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Run the browser without a visible window
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Extra command-line flags passed to the browser
    #[serde(default = "default_browser_args")]
    pub browser_args: Vec<String>,

    /// Upper bound for loading a single page, in seconds
    #[serde(default = "default_page_timeout_secs")]
    pub page_timeout_secs: u64,

    /// Upper bound for the sitemap request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Directory the Markdown files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// User agent sent with the sitemap request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_browser_args() -> Vec<String> {
    vec![
        "--disable-gpu".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--no-sandbox".to_string(),
    ]
}

fn default_page_timeout_secs() -> u64 {
    45
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_output_dir() -> String {
    "documentos".to_string()
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            headless: default_headless(),
            browser_args: default_browser_args(),
            page_timeout_secs: default_page_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            output_dir: default_output_dir(),
            user_agent: default_user_agent(),
        }
    }
}

impl CrawlerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the WebDriver URL with the WEBDRIVER_URL environment variable if set
    pub fn with_env_overrides(self) -> Self {
        self.apply_webdriver_override(std::env::var("WEBDRIVER_URL").ok())
    }

    /// Replace the WebDriver URL unless `value` is missing or empty
    pub fn apply_webdriver_override(mut self, value: Option<String>) -> Self {
        if let Some(webdriver_url) = value.filter(|v| !v.is_empty()) {
            self.webdriver_url = webdriver_url;
        }
        self
    }

    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// All flags handed to the browser, including headless mode
    pub fn effective_browser_args(&self) -> Vec<String> {
        let mut args = self.browser_args.clone();
        if self.headless && !args.iter().any(|a| a.starts_with("--headless")) {
            args.insert(0, "--headless".to_string());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_browser_setup() {
        let config = CrawlerConfig::default();
        assert_eq!(config.output_dir, "documentos");
        assert!(config.headless);
        assert_eq!(config.page_timeout(), Duration::from_secs(45));
        assert_eq!(
            config.effective_browser_args(),
            vec![
                "--headless",
                "--disable-gpu",
                "--disable-dev-shm-usage",
                "--no-sandbox"
            ]
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            CrawlerConfig::from_json(r#"{"webdriver_url": "http://localhost:9515"}"#).unwrap();
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert_eq!(config.output_dir, "documentos");
        assert_eq!(config.browser_args.len(), 3);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = CrawlerConfig::from_json(r#"{"max_concurrency": 4}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_headed_mode_leaves_args_alone() {
        let config = CrawlerConfig {
            headless: false,
            ..CrawlerConfig::default()
        };
        assert!(
            !config
                .effective_browser_args()
                .iter()
                .any(|a| a == "--headless")
        );
    }

    #[test]
    fn test_webdriver_override_set() {
        let config = CrawlerConfig::default()
            .apply_webdriver_override(Some("http://selenium:4444".to_string()));
        assert_eq!(config.webdriver_url, "http://selenium:4444");
    }

    #[test]
    fn test_webdriver_override_empty_is_ignored() {
        let config = CrawlerConfig::default().apply_webdriver_override(Some(String::new()));
        assert_eq!(config.webdriver_url, "http://localhost:4444");
    }

    #[test]
    fn test_webdriver_override_absent_keeps_configured_url() {
        let config = CrawlerConfig::from_json(r#"{"webdriver_url": "http://localhost:9515"}"#)
            .unwrap()
            .apply_webdriver_override(None);
        assert_eq!(config.webdriver_url, "http://localhost:9515");
    }

    #[test]
    fn test_from_file_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_dir": "out", "headless": false}"#).unwrap();

        let config = CrawlerConfig::from_file(&path).unwrap();
        assert_eq!(config.output_dir, "out");
        assert!(!config.headless);
    }

    #[test]
    fn test_from_file_missing() {
        let err = CrawlerConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
