//! Sitemap fetching against a mock HTTP server

use sitemap_scrape::error::SitemapError;
use sitemap_scrape::sitemap::{fetch_sitemap, get_sitemap_urls};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SITEMAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/</loc></url>
  <url><loc>https://example.com/pricing</loc></url>
</urlset>"#;

async fn serve(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_fetch_valid_sitemap() {
    let mock_server = serve(200, SITEMAP).await;
    let client = reqwest::Client::new();

    let urls = get_sitemap_urls(&client, &format!("{}/sitemap.xml", mock_server.uri())).await;

    assert_eq!(urls, vec!["https://example.com/", "https://example.com/pricing"]);
}

#[tokio::test]
async fn test_http_error_yields_empty_list() {
    let mock_server = serve(404, "not found").await;
    let client = reqwest::Client::new();
    let url = format!("{}/sitemap.xml", mock_server.uri());

    assert!(get_sitemap_urls(&client, &url).await.is_empty());

    let err = fetch_sitemap(&client, &url).await.unwrap_err();
    assert!(matches!(err, SitemapError::Status { status, .. } if status.as_u16() == 404));
}

#[tokio::test]
async fn test_server_error_yields_empty_list() {
    let mock_server = serve(503, SITEMAP).await;
    let client = reqwest::Client::new();

    let urls = get_sitemap_urls(&client, &format!("{}/sitemap.xml", mock_server.uri())).await;

    assert!(urls.is_empty());
}

#[tokio::test]
async fn test_malformed_xml_yields_empty_list() {
    let mock_server = serve(200, "<html><body>oops</html>").await;
    let client = reqwest::Client::new();
    let url = format!("{}/sitemap.xml", mock_server.uri());

    assert!(get_sitemap_urls(&client, &url).await.is_empty());
    assert!(matches!(
        fetch_sitemap(&client, &url).await,
        Err(SitemapError::Xml(_)) | Err(SitemapError::Malformed(_))
    ));
}

#[tokio::test]
async fn test_unreachable_server_yields_empty_list() {
    // nothing listens on port 1
    let url = "http://127.0.0.1:1/sitemap.xml";
    let client = reqwest::Client::new();

    assert!(matches!(
        fetch_sitemap(&client, url).await,
        Err(SitemapError::Request { .. })
    ));
    assert!(get_sitemap_urls(&client, url).await.is_empty());
}
