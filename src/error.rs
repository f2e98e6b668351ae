// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end extraction early. Everything below the school level
/// is recovered in place and only logged.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read HTML file '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no school sections found (expected div class='school')")]
    NoSchools,

    #[error("invalid selector '{css}': {reason}")]
    BadSelector { css: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,

    #[error("path exists but is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io { path: path.into(), source }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unknown format: {0} (expected xlsx, csv or tsv)")]
    UnknownFormat(String),

    #[error("unknown arg: {0}")]
    UnknownArg(String),
}
