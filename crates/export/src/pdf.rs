use std::fs::{self, File};
use std::io::{BufWriter, Cursor};
use std::path::{Path, PathBuf};

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use serde::Serialize;
use wayplan_core::geo::Coordinates;
use wayplan_core::naming::pdf_filename;
use wayplan_db::models::itinerary::ItineraryWithDetails;

use crate::staticmap::StaticMapClient;
use crate::ExportError;

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 15.0;
const CONTENT_WIDTH_MM: f64 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
const PLACE_MAP_WIDTH_MM: f64 = 120.0;
const BLOCK_GAP_MM: f64 = 4.0;
const IMAGE_DPI: f64 = 300.0;
const LAYER_NAME: &str = "Layer 1";

const TITLE_PT: f64 = 20.0;
const HEADING_PT: f64 = 15.0;
const BODY_PT: f64 = 10.0;

const REGULAR_FONT_FILE: &str = "NotoSans-Regular.ttf";
const BOLD_FONT_FILE: &str = "NotoSans-Bold.ttf";

/// Character budget per wrapped description line at body size.
const WRAP_COLUMNS: usize = 95;

/// Where the export landed and how big it came out.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedPdf {
    pub path: PathBuf,
    pub pages: usize,
}

/// Renders an itinerary to `{export_dir}/{sanitized name}.pdf`.
///
/// All map images are fetched before the first page is laid out, so a failed
/// fetch aborts the export without leaving a file behind. There is no retry.
pub async fn export_itinerary(
    maps: &StaticMapClient,
    font_dir: &Path,
    export_dir: &Path,
    itinerary: &ItineraryWithDetails,
) -> Result<ExportedPdf, ExportError> {
    if itinerary.places.is_empty() {
        return Err(ExportError::EmptyItinerary);
    }

    let pins: Vec<Coordinates> = itinerary
        .places
        .iter()
        .map(|place| Coordinates {
            latitude: place.attraction.attraction.latitude,
            longitude: place.attraction.attraction.longitude,
        })
        .collect();

    let overview = maps.fetch_png(&maps.overview_url(&pins)).await?;
    let mut place_maps = Vec::with_capacity(pins.len());
    for pin in &pins {
        place_maps.push(maps.fetch_png(&maps.place_url(*pin)).await?);
    }

    let rendered = render_itinerary(itinerary, &overview, &place_maps, font_dir)?;

    fs::create_dir_all(export_dir)?;
    let path = export_dir.join(pdf_filename(&itinerary.itinerary.name));
    let file = File::create(&path)?;
    rendered
        .doc
        .save(&mut BufWriter::new(file))
        .map_err(|err| ExportError::Pdf(err.to_string()))?;

    tracing::info!(
        itinerary_id = itinerary.itinerary.id,
        path = %path.display(),
        pages = rendered.pages,
        "itinerary exported"
    );
    Ok(ExportedPdf {
        path,
        pages: rendered.pages,
    })
}

struct RenderedDocument {
    doc: PdfDocumentReference,
    pages: usize,
}

fn render_itinerary(
    itinerary: &ItineraryWithDetails,
    overview_png: &[u8],
    place_maps: &[Vec<u8>],
    font_dir: &Path,
) -> Result<RenderedDocument, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        &itinerary.itinerary.name,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let regular = doc
        .add_external_font(File::open(font_dir.join(REGULAR_FONT_FILE))?)
        .map_err(|err| ExportError::Pdf(err.to_string()))?;
    let bold = doc
        .add_external_font(File::open(font_dir.join(BOLD_FONT_FILE))?)
        .map_err(|err| ExportError::Pdf(err.to_string()))?;

    let layer = doc.get_page(first_page).get_layer(first_layer);
    let mut writer = PageWriter {
        doc,
        layer,
        y: PAGE_HEIGHT_MM - MARGIN_MM,
        pages: 1,
    };

    writer.text_line(&itinerary.itinerary.name, TITLE_PT, &bold);
    writer.gap(BLOCK_GAP_MM);
    writer.image_block(overview_png, CONTENT_WIDTH_MM)?;

    for (place, map_png) in itinerary.places.iter().zip(place_maps) {
        let attraction = &place.attraction.attraction;

        writer.gap(BLOCK_GAP_MM);
        writer.text_line(
            &format!("{} {}", place.place.sort_order, attraction.name),
            HEADING_PT,
            &bold,
        );
        if let Some(local) = attraction.name_local.as_deref().filter(|s| !s.is_empty()) {
            writer.text_line(local, BODY_PT, &regular);
        }
        writer.image_block(map_png, PLACE_MAP_WIDTH_MM)?;
        if let Some(description) = attraction.description.as_deref().filter(|s| !s.is_empty()) {
            writer.paragraph(description, BODY_PT, &regular);
        }
    }

    Ok(RenderedDocument {
        pages: writer.pages,
        doc: writer.doc,
    })
}

/// Top-down layout cursor over a growing document.
///
/// `y` is the next free baseline in mm from the page bottom; every block
/// moves it down and page breaks reset it below the top margin.
struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    y: f64,
    pages: usize,
}

impl PageWriter {
    fn ensure_room(&mut self, needed_mm: f64) {
        if self.y - needed_mm < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
            self.pages += 1;
        }
    }

    fn text_line(&mut self, text: &str, size_pt: f64, font: &IndirectFontRef) {
        let line = line_height_mm(size_pt);
        self.ensure_room(line);
        self.y -= line;
        self.layer
            .use_text(text, size_pt, Mm(MARGIN_MM), Mm(self.y), font);
    }

    fn paragraph(&mut self, text: &str, size_pt: f64, font: &IndirectFontRef) {
        for line in wrap_text(text, WRAP_COLUMNS) {
            self.text_line(&line, size_pt, font);
        }
    }

    /// Draws a PNG scaled to `width_mm`, breaking the page first when the
    /// image plus one more text line would not fit above the bottom margin.
    fn image_block(&mut self, png: &[u8], width_mm: f64) -> Result<(), ExportError> {
        let decoder =
            PngDecoder::new(Cursor::new(png)).map_err(|err| ExportError::Image(err.to_string()))?;
        let image =
            Image::try_from(decoder).map_err(|err| ExportError::Image(err.to_string()))?;

        let native_width = px_to_mm(image.image.width.0, IMAGE_DPI);
        let native_height = px_to_mm(image.image.height.0, IMAGE_DPI);
        let scale = width_mm / native_width;
        let height_mm = native_height * scale;

        self.ensure_room(height_mm + line_height_mm(BODY_PT));
        self.y -= height_mm;
        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(MARGIN_MM)),
                translate_y: Some(Mm(self.y)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );
        self.y -= BLOCK_GAP_MM;
        Ok(())
    }

    fn gap(&mut self, mm: f64) {
        self.y -= mm;
    }
}

fn px_to_mm(px: usize, dpi: f64) -> f64 {
    px as f64 * 25.4 / dpi
}

fn line_height_mm(font_size_pt: f64) -> f64 {
    font_size_pt * 25.4 / 72.0 * 1.4
}

/// Greedy word wrap on a character budget. Existing newlines are respected,
/// blank lines collapse, and a single overlong word stays on its own line
/// rather than being split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for source_line in text.lines() {
        let mut current = String::new();
        for word in source_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("a short line", 40), vec!["a short line"]);
    }

    #[test]
    fn wraps_at_the_character_budget() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn respects_existing_newlines() {
        let lines = wrap_text("first paragraph\nsecond paragraph", 40);
        assert_eq!(lines, vec!["first paragraph", "second paragraph"]);
    }

    #[test]
    fn blank_lines_collapse() {
        let lines = wrap_text("above\n\nbelow", 40);
        assert_eq!(lines, vec!["above", "below"]);
    }

    #[test]
    fn overlong_word_is_kept_whole() {
        let lines = wrap_text("tiny Donaudampfschifffahrtsgesellschaft tail", 10);
        assert_eq!(
            lines,
            vec!["tiny", "Donaudampfschifffahrtsgesellschaft", "tail"]
        );
    }

    #[test]
    fn empty_text_produces_no_lines() {
        assert!(wrap_text("", 40).is_empty());
        assert!(wrap_text("   \n  ", 40).is_empty());
    }

    #[test]
    fn budget_counts_characters_not_bytes() {
        let lines = wrap_text("крепость бастион", 8);
        assert_eq!(lines, vec!["крепость", "бастион"]);
    }

    #[test]
    fn pixel_to_mm_follows_dpi() {
        assert!((px_to_mm(300, 300.0) - 25.4).abs() < 1e-9);
        assert!((px_to_mm(2560, 300.0) - 216.746).abs() < 1e-2);
    }
}
