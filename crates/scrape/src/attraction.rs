use serde::Serialize;

use crate::sites;
use crate::ScrapeError;

/// Attraction details extracted from a supported site.
///
/// Fields the page does not carry come back as empty strings or `0.0`
/// coordinates; the caller decides whether that is good enough to keep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapedAttraction {
    pub name: String,
    pub name_local: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Fetches `url` and extracts attraction details with the parser matching
/// the site. Unrecognized hosts fall through to the rutraveller rules.
pub async fn parse_attraction(
    client: &reqwest::Client,
    url: &str,
) -> Result<ScrapedAttraction, ScrapeError> {
    let html = crate::fetch_page(client, url).await?;
    let parsed = if url.contains("www.votpusk.ru") {
        sites::votpusk::parse(&html)
    } else {
        sites::rutraveller::parse(&html)
    };
    tracing::debug!(url, name = %parsed.name, "parsed attraction page");
    Ok(parsed)
}
