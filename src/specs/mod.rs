// src/specs/mod.rs
//! # Page "specs"
//!
//! Each spec encodes *where the ground truth lives in the HTML* of one page
//! layout and *how to extract it*, returning plain records.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a loaded document via `core::html` selector helpers.
//! - **Fallbacks** for missing headings (sentinel names) and skipped subtrees.
//! - **Light cleaning** of scraped text (`core::sanitize`).
//!
//! ## What does **not** live here
//! - Export formatting or file writing (`file`, `xlsx`, `csv`).
//! - Deciding whether a run writes anything (`runner`).
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → specs::candidates::extract(path)
//!                   ↘  Vec<CandidateRecord>
//!                     file::export_dataset (outside of specs)
//! ```
//!
//! Specs are testable offline: `parse_document` takes the HTML as a string.
pub mod candidates;
