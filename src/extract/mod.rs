//! HTML parsers for the three portal data views.
//!
//! All parsers are pure functions over raw HTML: no fetching, no shared
//! state, no panics on missing markup. Partial data beats total failure —
//! the portal's table structures vary across campuses and terms, so a
//! missing fragment yields an empty string, not an error.

pub mod classes;
pub mod info;
pub mod schedule;

use scraper::ElementRef;

/// Collapse whitespace runs and trim, matching the portal's visual text.
pub(crate) fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleaned text content of an element.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}
