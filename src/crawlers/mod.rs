pub mod crawler;
pub mod sequential;
pub mod web;

pub use crawler::CrawlDelegate;
pub use sequential::{CrawlReport, collect_pages, crawl_sequential};
pub use web::WebDriverCrawler;
