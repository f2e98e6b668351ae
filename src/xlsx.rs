// src/xlsx.rs
//
// Workbook writer: one sheet, bold header row, text cells only.

use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};

use crate::core::sanitize::sanitize_sheet_name;
use crate::data::DataSet;
use crate::error::ExportError;

/// Create (or overwrite) `path` with a single sheet holding `ds`.
/// Returns the sheet name actually used.
pub fn write_workbook(path: &Path, ds: &DataSet, sheet_name: &str) -> Result<String, ExportError> {
    if ds.is_empty() {
        return Err(ExportError::Empty);
    }

    let sheet = sanitize_sheet_name(sheet_name);
    if sheet != sheet_name {
        logw!("Sheet name '{sheet_name}' adjusted to '{sheet}'");
    }

    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet)?;

    let mut next_row: RowNum = 0;
    if let Some(headers) = &ds.headers {
        for (col, h) in (0 as ColNum..).zip(headers) {
            worksheet.write_string_with_format(next_row, col, h, &bold)?;
        }
        next_row += 1;
    }

    for (row, cells) in (next_row..).zip(&ds.rows) {
        for (col, cell) in (0 as ColNum..).zip(cells) {
            worksheet.write_string(row, col, cell)?;
        }
    }
    worksheet.autofit();

    workbook.save(path)?;
    logd!("Workbook saved: {} rows → {}", ds.len(), path.display());
    Ok(sheet)
}
