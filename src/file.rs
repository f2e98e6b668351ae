// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_dataset;
use crate::data::{CandidateRecord, DataSet};
use crate::error::ExportError;
use crate::xlsx::write_workbook;

/// Summary of one written export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    /// Sheet name for workbooks; `None` for delimited files.
    pub sheet: Option<String>,
    pub rows: usize,
}

/// Write `records` according to `export` (format, path, sheet, headers).
/// Always creates the file fresh.
pub fn export_records(export: &ExportOptions, records: &[CandidateRecord]) -> Result<Written, ExportError> {
    export_dataset(export, &DataSet::from_records(records))
}

pub fn export_dataset(export: &ExportOptions, ds: &DataSet) -> Result<Written, ExportError> {
    if ds.is_empty() {
        return Err(ExportError::Empty);
    }

    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let sheet = match export.format.delim() {
        None => Some(write_workbook(&path, ds, &export.sheet_name)?),
        Some(sep) => {
            write_delimited(&path, ds, export.include_headers, sep)?;
            None
        }
    };

    Ok(Written { path, sheet, rows: ds.len() })
}

/// Create/truncate `path` and stream the dataset as CSV/TSV.
pub fn write_delimited(path: &Path, ds: &DataSet, include_headers: bool, sep: char) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_dataset(&mut out, ds, include_headers, sep).map_err(|e| ExportError::io(path, e))?;
    out.flush().map_err(|e| ExportError::io(path, e))?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory { path: dir.to_path_buf() });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;
    }
    Ok(())
}

