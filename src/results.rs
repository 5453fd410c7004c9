/// Outcome of crawling a single sitemap URL
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    /// URL of the page
    pub url: String,

    /// Title of the page (if available)
    pub title: Option<String>,

    /// Markdown content, present only when the crawl succeeded
    pub markdown: Option<String>,

    /// Why the crawl failed, kept for logging
    pub error: Option<String>,
}

impl PageResult {
    /// A successfully crawled page
    pub fn success(url: impl Into<String>, title: Option<String>, markdown: String) -> Self {
        Self {
            url: url.into(),
            title,
            markdown: Some(markdown),
            error: None,
        }
    }

    /// A page that could not be crawled
    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            markdown: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.markdown.is_some()
    }
}

/// Markdown accumulated over a crawl: one combined document plus one chunk per page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlDocument {
    pub combined: String,
    pub chunks: Vec<String>,
}

impl CrawlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page to both accumulators. Failed pages are ignored.
    ///
    /// Returns whether the page was added.
    pub fn push(&mut self, page: &PageResult) -> bool {
        let Some(markdown) = page.markdown.as_deref() else {
            return false;
        };
        self.combined.push_str(&combined_block(&page.url, markdown));
        self.chunks.push(chunk_block(&page.url, markdown));
        true
    }

    /// Number of pages added so far
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// A page as it appears in the combined file, with a trailing rule
pub fn combined_block(url: &str, markdown: &str) -> String {
    format!("# Page: {url}\n\n{markdown}\n\n---\n\n")
}

/// A page as it appears in split files
pub fn chunk_block(url: &str, markdown: &str) -> String {
    format!("# Page: {url}\n\n{markdown}\n\n")
}
