//! HTML scraping of attraction pages and image search results.
//!
//! Each supported site gets a pure `parse` function over the raw HTML so the
//! extraction rules are testable without network access. Fetching is a thin
//! wrapper around a shared [`reqwest::Client`].

pub mod attraction;
pub mod images;
pub mod sites;

mod error;

pub use error::ScrapeError;

/// Downloads a page and returns its body as text.
///
/// Non-success status codes are turned into errors so callers never try to
/// parse an upstream error page as content.
pub(crate) async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, ScrapeError> {
    tracing::debug!(url, "fetching page");
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}
