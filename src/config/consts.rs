// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "ku_graduation_commencement_2020.html";

// Page structure (CSS selectors)
pub const SCHOOL_SELECTOR: &str = "div.school";
pub const SCHOOL_NAME_SELECTOR: &str = "h2.school__name";
pub const DEGREE_SELECTOR: &str = "div.degree_wrapper";
pub const DEGREE_NAME_SELECTOR: &str = "h4.degree__h4";
pub const CANDIDATE_LIST_SELECTOR: &str = "ul.list-unstyled";
pub const CANDIDATE_ITEM_SELECTOR: &str = "li";

// Sentinels
pub const UNKNOWN_SCHOOL: &str = "Unknown School";
pub const UNKNOWN_MAJOR: &str = "Unknown Major";

// Export
pub const DEFAULT_OUT_DIR: &str = "";
pub const DEFAULT_FILE: &str = "KU_2020_Degree_Candidates";
pub const DEFAULT_SHEET: &str = "Candidates";
pub const HEADERS: [&str; 3] = ["Name", "Major", "School"];

// Excel limits
pub const SHEET_NAME_MAX: usize = 31;
