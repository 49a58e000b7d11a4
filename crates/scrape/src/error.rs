use thiserror::Error;

/// Failures while talking to a scraped site.
///
/// Extraction itself never fails: sites rearrange their markup all the time,
/// so missing selectors degrade to empty fields instead of hard errors.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}
