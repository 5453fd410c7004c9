use crate::crawlers::CrawlDelegate;
use crate::error::OutputError;
use crate::output::{self, SplitMode};
use crate::results::CrawlDocument;
use std::path::{Path, PathBuf};

/// What a finished crawl produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlReport {
    pub pages_crawled: usize,
    pub pages_failed: usize,
    pub files: Vec<PathBuf>,
}

/// Crawls `urls` one after another and accumulates the successful pages in order
pub async fn collect_pages<D: CrawlDelegate>(delegate: &mut D, urls: &[String]) -> CrawlDocument {
    let mut document = CrawlDocument::new();

    for (i, url) in urls.iter().enumerate() {
        ::log::trace!("Crawling {}/{}: {}", i + 1, urls.len(), url);
        let page = delegate.crawl(url).await;

        if document.push(&page) {
            ::log::info!("Successfully crawled: {}", url);
        } else {
            ::log::warn!(
                "Failed: {} - Error: {}",
                url,
                page.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    document
}

/// Crawls every URL through `delegate`, writes the output files and closes the delegate.
///
/// The delegate is closed exactly once, after the files are written, whether
/// or not writing succeeded.
pub async fn crawl_sequential<D: CrawlDelegate>(
    mut delegate: D,
    urls: &[String],
    output_dir: &Path,
    split: SplitMode,
    site_name: &str,
) -> Result<CrawlReport, OutputError> {
    let document = collect_pages(&mut delegate, urls).await;
    let written = output::write_outputs(output_dir, site_name, split, &document);

    delegate.close().await;

    Ok(CrawlReport {
        pages_crawled: document.len(),
        pages_failed: urls.len() - document.len(),
        files: written?,
    })
}
