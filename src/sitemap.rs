use crate::error::SitemapError;
use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};

/// Namespace every sitemaps.org document is declared in
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Fetches the sitemap and returns its URLs, or an empty list on any failure.
///
/// Failures are logged. Callers cannot tell an unreachable or broken sitemap
/// from an empty one; use [`fetch_sitemap`] when that matters.
pub async fn get_sitemap_urls(client: &reqwest::Client, sitemap_url: &str) -> Vec<String> {
    match fetch_sitemap(client, sitemap_url).await {
        Ok(urls) => urls,
        Err(e) => {
            ::log::error!("Error fetching sitemap: {}", e);
            Vec::new()
        }
    }
}

/// Fetches and parses the sitemap at `sitemap_url`
pub async fn fetch_sitemap(
    client: &reqwest::Client,
    sitemap_url: &str,
) -> Result<Vec<String>, SitemapError> {
    let request_error = |source| SitemapError::Request {
        url: sitemap_url.to_string(),
        source,
    };

    let response = client
        .get(sitemap_url)
        .send()
        .await
        .map_err(request_error)?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(SitemapError::Status {
            url: sitemap_url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(request_error)?;
    ::log::debug!("Sitemap body is {} bytes", body.len());

    parse_sitemap(&body)
}

/// Extracts every `<loc>` in the sitemaps.org namespace, in document order.
///
/// Works for both `urlset` and `sitemapindex` documents.
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>, SitemapError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut current_loc: Option<String> = None;

    loop {
        match reader.read_resolved_event()? {
            (ns, Event::Start(e)) => {
                depth += 1;
                saw_root = true;
                if is_sitemap_loc(&ns, e.local_name().as_ref()) {
                    current_loc = Some(String::new());
                }
            }
            (_, Event::Empty(_)) => {
                // an empty <loc/> carries no URL
                saw_root = true;
            }
            (_, Event::Text(t)) => {
                if let Some(loc) = current_loc.as_mut() {
                    loc.push_str(&t.unescape().map_err(quick_xml::Error::from)?);
                }
            }
            (_, Event::CData(c)) => {
                if let Some(loc) = current_loc.as_mut() {
                    loc.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            (_, Event::End(_)) => {
                depth = depth.saturating_sub(1);
                if let Some(loc) = current_loc.take() {
                    let loc = loc.trim();
                    if !loc.is_empty() {
                        urls.push(loc.to_string());
                    }
                }
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(SitemapError::Malformed("no root element".to_string()));
    }
    if depth != 0 {
        return Err(SitemapError::Malformed(
            "document ended before all elements were closed".to_string(),
        ));
    }

    Ok(urls)
}

fn is_sitemap_loc(ns: &ResolveResult, local_name: &[u8]) -> bool {
    local_name == b"loc"
        && matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == SITEMAP_NS.as_bytes())
}
