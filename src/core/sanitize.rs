// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{DEFAULT_SHEET, SHEET_NAME_MAX};

/// Trailing ", <degree descriptor>" made of ASCII letters and whitespace only.
static DEGREE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*[A-Za-z\s]+$").expect("degree suffix pattern is valid")
});

/// "Jane Doe, Bachelor of Arts" → "Jane Doe".
/// Descriptors holding digits or punctuation ("Doe, B.A. 2020") are left alone.
pub fn strip_degree_suffix(s: &str) -> String {
    let s = s.trim();
    DEGREE_SUFFIX.replace(s, "").trim().to_string()
}

/// Make a user-supplied sheet name acceptable to Excel:
/// `[ ] : * ? / \` become '_', at most 31 chars, no leading/trailing `'`.
pub fn sanitize_sheet_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        match ch {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => out.push('_'),
            c if c.is_control() => {}
            c => out.push(c),
        }
        if out.chars().count() >= SHEET_NAME_MAX { break; }
    }
    let out = out.trim_matches('\'').trim().to_string();
    if out.is_empty() { s!(DEFAULT_SHEET) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_alphabetic_descriptor() {
        assert_eq!(strip_degree_suffix("Jane Doe, Bachelor of Arts"), "Jane Doe");
        assert_eq!(strip_degree_suffix("  John Smith  "), "John Smith");
        assert_eq!(strip_degree_suffix("Ann Lee ,  Master of Science "), "Ann Lee");
    }

    #[test]
    fn keeps_non_alphabetic_descriptor() {
        assert_eq!(strip_degree_suffix("Doe, B.A. 2020"), "Doe, B.A. 2020");
        assert_eq!(strip_degree_suffix("Doe,"), "Doe,");
    }

    #[test]
    fn only_the_final_alphabetic_segment_goes() {
        assert_eq!(strip_degree_suffix("Smith, Jr., Bachelor of Arts"), "Smith, Jr.");
    }

    #[test]
    fn stripping_twice_is_stable() {
        for raw in ["Jane Doe, Bachelor of Arts", "John Smith", "Doe, B.A. 2020", "Smith, Jr., BA"] {
            let once = strip_degree_suffix(raw);
            assert_eq!(strip_degree_suffix(&once), once, "input: {raw}");
        }
    }

    #[test]
    fn sheet_names_are_made_valid() {
        assert_eq!(sanitize_sheet_name("Candidates"), "Candidates");
        assert_eq!(sanitize_sheet_name("2020/2021: All?"), "2020_2021_ All_");
        assert_eq!(sanitize_sheet_name("   "), DEFAULT_SHEET);
        assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40)).chars().count(), SHEET_NAME_MAX);
    }
}
