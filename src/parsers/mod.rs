pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use url::Url;

/// Kind of resource behind a URL, which decides how its source is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Rendered HTML page
    Html,
    /// Plain text resource shown verbatim by the browser
    Text,
}

impl ContentType {
    /// Determines the content type from the URL path
    pub fn from_url(url: &str) -> Self {
        let path = Url::parse(url)
            .map(|u| u.path().to_ascii_lowercase())
            .unwrap_or_else(|_| url.to_ascii_lowercase());

        if [".txt", ".md", ".yml", ".yaml"]
            .iter()
            .any(|ext| path.ends_with(ext))
        {
            ::log::debug!("Classifying as Text: {}", url);
            ContentType::Text
        } else {
            ::log::trace!("Classifying as HTML: {}", url);
            ContentType::Html
        }
    }
}

/// Result of converting a page
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedPage {
    /// Page title, when the source has one
    pub title: Option<String>,
    /// Markdown rendition of the page
    pub markdown: String,
}

/// Converts page sources to Markdown
pub struct Parser;

impl Parser {
    /// Convert a page source of the given content type
    pub fn convert(source: &str, content_type: ContentType) -> ConvertedPage {
        match content_type {
            ContentType::Html => html::to_markdown(source),
            ContentType::Text => ConvertedPage {
                title: None,
                markdown: text::normalize(&html::visible_text(source)),
            },
        }
    }

    /// Determine content type from URL and then convert
    pub fn convert_from_url(source: &str, url: &str) -> ConvertedPage {
        Self::convert(source, ContentType::from_url(url))
    }
}
