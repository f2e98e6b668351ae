// src/core/html.rs
//
// Thin helpers over `scraper` so the page specs read as selector lookups.

use scraper::{ElementRef, Selector};

use crate::error::ExtractError;

pub fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::BadSelector {
        css,
        reason: e.to_string(),
    })
}

/// Full text content of an element (all descendant text nodes), trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first descendant matching `sel`, if any.
pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    scope.select(sel).next().map(text_of)
}
