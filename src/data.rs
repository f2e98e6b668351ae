// src/data.rs
//
// - CandidateRecord: one flattened (Name, Major, School) entry, as scraped.
// - DataSet: the tabular projection every exporter consumes.

use crate::config::consts::HEADERS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateRecord {
    pub name: String,
    pub major: String,
    pub school: String,
}

impl CandidateRecord {
    pub fn new(name: impl Into<String>, major: impl Into<String>, school: impl Into<String>) -> Self {
        Self { name: name.into(), major: major.into(), school: school.into() }
    }

    /// Row in fixed column order: Name, Major, School.
    pub fn to_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.major.clone(), self.school.clone()]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_records(records: &[CandidateRecord]) -> Self {
        Self {
            headers: Some(HEADERS.iter().map(|h| s!(*h)).collect()),
            rows: records.iter().map(CandidateRecord::to_row).collect(),
        }
    }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    #[inline] pub fn len(&self) -> usize { self.rows.len() }
}
