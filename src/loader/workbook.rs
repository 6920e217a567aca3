// src/loader/workbook.rs

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, DataType, Reader, Xlsx};

use crate::errors::{ReportError, ReportResult};
use crate::loader::table::{Cell, RawTable};

/// Reads one named worksheet. The first row is the header.
pub fn read_sheet(bytes: &[u8], sheet: &str) -> ReportResult<RawTable> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(ReportError::Signature(format!(
            "worksheet '{sheet}' not found (have: {})",
            workbook.sheet_names().join(", ")
        )));
    }

    let range = workbook.worksheet_range(sheet)?;
    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(header_row) => header_row.iter().map(|c| to_cell(c).as_text()).collect(),
        None => Vec::new(),
    };

    let rows = rows.map(|row| row.iter().map(to_cell).collect()).collect();

    Ok(RawTable { headers, rows })
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::text(s),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => data
            .as_datetime()
            .map_or_else(|| Cell::text(&data.to_string()), Cell::DateTime),
        other => Cell::text(&other.to_string()),
    }
}
