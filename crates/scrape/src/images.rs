use scraper::{Html, Selector};
use serde::Serialize;

use crate::ScrapeError;

/// Image URLs found for an attraction plus the search URL they came from,
/// so a client can hand off to the full results page.
#[derive(Debug, Clone, Serialize)]
pub struct ImageSearchResult {
    pub images: Vec<String>,
    pub url: String,
}

/// Large-image search URL for `"{name} {city}"`.
///
/// Spaces in the name become `+` so multi-word names stay a single query.
pub fn build_search_url(name: &str, city: &str) -> String {
    let name = name.replace(' ', "+");
    format!("https://www.google.com/search?q={name}+{city}&tbm=isch&tbs=isz:l")
}

/// Every `<img src>` that points at an absolute URL, in document order.
/// Inline `data:` thumbnails and relative chrome assets are skipped.
pub fn parse_image_urls(html: &str) -> Vec<String> {
    let sel = Selector::parse("img").unwrap();
    Html::parse_document(html)
        .select(&sel)
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| src.starts_with("http"))
        .map(str::to_string)
        .collect()
}

/// Runs an image search for the attraction and returns the scraped results.
pub async fn search_images(
    client: &reqwest::Client,
    name: &str,
    city: &str,
) -> Result<ImageSearchResult, ScrapeError> {
    let url = build_search_url(name, city);
    let html = crate::fetch_page(client, &url).await?;
    let images = parse_image_urls(&html);
    tracing::debug!(name, city, count = images.len(), "image search finished");
    Ok(ImageSearchResult { images, url })
}
