use regex::Regex;
use scraper::{Html, Selector};

use crate::attraction::ScrapedAttraction;

const DESCRIPTION_SELECTOR: &str = ".landmark-info__text p";
const NAME_SELECTOR: &str = ".block-head__title";
const SUBTITLE_SELECTOR: &str = ".block-head__subtitle";

/// Extracts attraction details from a votpusk landmark page.
///
/// The local name sits in the subtitle behind a fixed Russian label, and the
/// coordinates only exist inside an embedded JSON-LD block, so those two are
/// pulled out with regexes rather than selectors.
pub fn parse(html: &str) -> ScrapedAttraction {
    let doc = Html::parse_document(html);

    let description = selected_text(&doc, DESCRIPTION_SELECTOR);
    let name = selected_text(&doc, NAME_SELECTOR).trim().to_string();

    let subtitle = selected_text(&doc, SUBTITLE_SELECTOR);
    let local_re = Regex::new(r"Название на английском языке - (?<local>.*).").unwrap();
    let name_local = local_re
        .captures(&subtitle)
        .map(|caps| caps["local"].to_string())
        .unwrap_or_default();

    let (latitude, longitude) = parse_coordinates(html);

    ScrapedAttraction {
        name,
        name_local,
        description,
        latitude,
        longitude,
    }
}

/// Coordinates from the JSON-LD metadata, matched over the raw page because
/// script contents are invisible to CSS selection.
fn parse_coordinates(html: &str) -> (f64, f64) {
    let coords_re =
        Regex::new(r#""latitude":(?<lat>[0-9]*[.][0-9]*),"longitude":(?<lon>[0-9]*[.][0-9]*)"#)
            .unwrap();
    match coords_re.captures(html) {
        Some(caps) => (
            caps["lat"].parse().unwrap_or(0.0),
            caps["lon"].parse().unwrap_or(0.0),
        ),
        None => (0.0, 0.0),
    }
}

fn selected_text(doc: &Html, selector: &str) -> String {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).flat_map(|el| el.text()).collect()
}
