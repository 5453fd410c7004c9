use clap::Parser;
use sitemap_scrape::{CrawlerConfig, SiteScrape};

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging, showing progress unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CrawlerConfig::from_file(path)?,
        None => CrawlerConfig::default(),
    }
    .with_env_overrides();
    let config = args.apply_to(config);

    let scrape = SiteScrape::new(&args.site)
        .with_config(config)
        .with_split(args.split_mode());

    let start_time = std::time::Instant::now();
    let summary = scrape.run().await?;

    if let Some(report) = summary.report {
        ::log::info!(
            "Crawled {} of {} pages ({} failed), wrote {} files in {:.2} seconds",
            report.pages_crawled,
            summary.urls_found,
            report.pages_failed,
            report.files.len(),
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}
