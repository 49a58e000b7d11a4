//! Per-site extraction rules. One module per supported site, each exposing a
//! pure `parse(html) -> ScrapedAttraction` so tests can run on fixture pages.

pub mod rutraveller;
pub mod votpusk;
