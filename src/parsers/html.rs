use crate::parsers::{ConvertedPage, text};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("static selector"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static selector"));

// Blocks that never contribute readable content
static NON_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<noscript\b[^>]*>.*?</noscript\s*>|<template\b[^>]*>.*?</template\s*>",
    )
    .expect("static regex")
});

/// Converts a rendered HTML page to Markdown
pub fn to_markdown(html: &str) -> ConvertedPage {
    let cleaned = strip_non_content(html);
    let doc = Html::parse_document(&cleaned);

    let title = extract_title(&doc);
    let body = doc
        .select(&BODY)
        .next()
        .map(|b| b.inner_html())
        .unwrap_or_default();

    let markdown = text::normalize(&html2md::parse_html(&body));
    ::log::trace!(
        "Converted {} bytes of HTML into {} bytes of Markdown",
        html.len(),
        markdown.len()
    );

    ConvertedPage { title, markdown }
}

/// Text content of the page body, keeping line breaks
pub fn visible_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    doc.select(&BODY)
        .flat_map(|n| n.text())
        .collect::<String>()
}

/// Removes script, style, noscript and template blocks
pub fn strip_non_content(html: &str) -> String {
    NON_CONTENT.replace_all(html, "").into_owned()
}

fn extract_title(doc: &Html) -> Option<String> {
    doc.select(&TITLE)
        .next()
        .map(|t| t.text().collect::<Vec<_>>().join(" "))
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|t| !t.is_empty())
}
