// src/csv.rs
use std::io::{self, Write};

use crate::data::DataSet;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stream a whole dataset, header first when asked for.
pub fn write_dataset<W: Write>(mut w: W, ds: &DataSet, include_headers: bool, sep: char) -> io::Result<()> {
    if include_headers {
        if let Some(h) = &ds.headers {
            write_row(&mut w, h, sep)?;
        }
    }
    for r in &ds.rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

/// Whole export as a string (handy for previews and tests).
pub fn to_export_string(ds: &DataSet, include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_dataset(&mut buf, ds, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
