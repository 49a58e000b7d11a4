use regex::Regex;
use scraper::{Html, Selector};

use crate::attraction::ScrapedAttraction;

const DESCRIPTION_SELECTOR: &str = ".place-descr .place-descr__box .place-descr__txt";
const COMBINED_NAME_SELECTOR: &str = ".topline-city .bth__ttl-h2";
const MAP_LINK_SELECTOR: &str = ".place-descr .place-descr__box .flr a";

/// Extracts attraction details from a rutraveller place page.
///
/// The page title carries both names as `Name (Local name)`; when that shape
/// is absent the combined text is used for both. Coordinates live in the href
/// of the map link as the first two decimal numbers, latitude first.
pub fn parse(html: &str) -> ScrapedAttraction {
    let doc = Html::parse_document(html);

    let description = selected_text(&doc, DESCRIPTION_SELECTOR)
        .trim()
        .replace("\n\n", "\n");

    let combined = selected_text(&doc, COMBINED_NAME_SELECTOR)
        .trim()
        .to_string();
    let name_re = Regex::new(r"(?<name>.*)\((?<local>.*)\)").unwrap();
    let (name, name_local) = match name_re.captures(&combined) {
        Some(caps) => (
            caps["name"].trim().to_string(),
            caps["local"].trim().to_string(),
        ),
        None => (combined.clone(), combined),
    };

    let map_sel = Selector::parse(MAP_LINK_SELECTOR).unwrap();
    let map_href = doc
        .select(&map_sel)
        .next()
        .and_then(|link| link.value().attr("href"))
        .unwrap_or_default();
    let (latitude, longitude) = parse_coordinates(map_href);

    ScrapedAttraction {
        name,
        name_local,
        description,
        latitude,
        longitude,
    }
}

/// First two decimal numbers in the map href, latitude then longitude.
fn parse_coordinates(href: &str) -> (f64, f64) {
    let number_re = Regex::new(r"[+-]?([0-9]*[.])?[0-9]+").unwrap();
    let mut numbers = number_re
        .find_iter(href)
        .filter_map(|m| m.as_str().parse::<f64>().ok());
    let latitude = numbers.next().unwrap_or(0.0);
    let longitude = numbers.next().unwrap_or(0.0);
    (latitude, longitude)
}

fn selected_text(doc: &Html, selector: &str) -> String {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).flat_map(|el| el.text()).collect()
}
