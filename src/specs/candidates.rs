// src/specs/candidates.rs
//! Scraping spec for the commencement candidate page.
//!
//! Layout:
//! ```text
//! div.school
//!   h2.school__name
//!   div.degree_wrapper        (one per degree program)
//!     h4.degree__h4
//!     ul.list-unstyled > li   (one per candidate, "Name[, Degree]")
//! ```
//! Output order is document order: school, then degree, then list item.

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::*;
use crate::core::html::{first_text, selector, text_of};
use crate::core::sanitize::strip_degree_suffix;
use crate::data::CandidateRecord;
use crate::error::ExtractError;

struct PageSelectors {
    school: Selector,
    school_name: Selector,
    degree: Selector,
    degree_name: Selector,
    list: Selector,
    item: Selector,
}

impl PageSelectors {
    fn compile() -> Result<Self, ExtractError> {
        Ok(Self {
            school: selector(SCHOOL_SELECTOR)?,
            school_name: selector(SCHOOL_NAME_SELECTOR)?,
            degree: selector(DEGREE_SELECTOR)?,
            degree_name: selector(DEGREE_NAME_SELECTOR)?,
            list: selector(CANDIDATE_LIST_SELECTOR)?,
            item: selector(CANDIDATE_ITEM_SELECTOR)?,
        })
    }
}

/// Read and parse `path`. Any failure is logged and yields no records.
pub fn extract(path: &Path) -> Vec<CandidateRecord> {
    match try_extract(path) {
        Ok(records) => records,
        Err(e) => {
            loge!("{e}");
            Vec::new()
        }
    }
}

/// Like [`extract`], but reports the run-ending conditions to the caller.
pub fn try_extract(path: &Path) -> Result<Vec<CandidateRecord>, ExtractError> {
    let html = fs::read_to_string(path).map_err(|source| ExtractError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    logd!("Read {} bytes from {}", html.len(), path.display());
    try_parse_document(&html)
}

/// Extract from an in-memory document, logging instead of failing.
pub fn parse_document(html: &str) -> Vec<CandidateRecord> {
    match try_parse_document(html) {
        Ok(records) => records,
        Err(e) => {
            loge!("{e}");
            Vec::new()
        }
    }
}

pub fn try_parse_document(html: &str) -> Result<Vec<CandidateRecord>, ExtractError> {
    let sel = PageSelectors::compile()?;
    let doc = Html::parse_document(html);

    let schools: Vec<ElementRef<'_>> = doc.select(&sel.school).collect();
    if schools.is_empty() {
        return Err(ExtractError::NoSchools);
    }
    logd!("Found {} school sections", schools.len());

    let mut out = Vec::new();
    for school in schools {
        extract_school(school, &sel, &mut out);
    }
    Ok(out)
}

/* ---------- helpers ---------- */

fn extract_school(school: ElementRef<'_>, sel: &PageSelectors, out: &mut Vec<CandidateRecord>) {
    let school_name = first_text(school, &sel.school_name)
        .unwrap_or_else(|| s!(UNKNOWN_SCHOOL));

    let mut degrees = school.select(&sel.degree).peekable();
    if degrees.peek().is_none() {
        logw!("No degree programs found for {school_name}. Please check HTML structure (div class='degree_wrapper').");
        return;
    }

    for degree in degrees {
        let major = first_text(degree, &sel.degree_name)
            .unwrap_or_else(|| s!(UNKNOWN_MAJOR));

        let Some(list) = degree.select(&sel.list).next() else {
            logw!("No candidate list found for {school_name} - {major}.");
            continue;
        };

        let before = out.len();
        for li in list.select(&sel.item) {
            let name = strip_degree_suffix(&text_of(li));
            out.push(CandidateRecord::new(name, major.as_str(), school_name.as_str()));
        }
        logd!("{school_name} / {major}: {} candidates", out.len() - before);
    }
}
