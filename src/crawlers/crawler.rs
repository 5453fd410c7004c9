use crate::results::PageResult;

/// A session that renders pages one at a time.
///
/// The session is opened by the implementor's constructor and stays open for
/// every [`crawl`](CrawlDelegate::crawl) call until [`close`](CrawlDelegate::close).
#[allow(async_fn_in_trait)]
pub trait CrawlDelegate: Sized {
    /// Crawl a single URL in the shared session.
    ///
    /// Failures are reported through the returned [`PageResult`], never as a panic.
    async fn crawl(&mut self, url: &str) -> PageResult;

    /// Release the session
    async fn close(self);
}
