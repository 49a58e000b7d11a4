//! Export artifact naming.
//!
//! The PDF export writes one file per itinerary, named after the
//! itinerary itself, so the name has to be made filesystem-safe first.

/// Build the PDF filename for an itinerary.
///
/// Path separators and other characters that are unsafe in filenames are
/// replaced with `_`; surrounding whitespace is trimmed. An empty or
/// all-unsafe name falls back to `itinerary.pdf`.
///
/// # Examples
///
/// ```
/// use wayplan_core::naming::pdf_filename;
///
/// assert_eq!(pdf_filename("Day 1"), "Day 1.pdf");
/// assert_eq!(pdf_filename("Rome: day 2/3"), "Rome_ day 2_3.pdf");
/// assert_eq!(pdf_filename("  "), "itinerary.pdf");
/// ```
pub fn pdf_filename(itinerary_name: &str) -> String {
    const UNSAFE: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0'];

    let cleaned: String = itinerary_name
        .trim()
        .chars()
        .map(|c| if UNSAFE.contains(&c) || c.is_control() { '_' } else { c })
        .collect();

    if cleaned.chars().all(|c| c == '_' || c.is_whitespace()) {
        return "itinerary.pdf".to_string();
    }

    format!("{cleaned}.pdf")
}
