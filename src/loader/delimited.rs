// src/loader/delimited.rs

use crate::errors::{ReportError, ReportResult};
use crate::loader::table::{Cell, RawTable};

const UTF8_BOM: &str = "\u{feff}";

/// Reads a comma-separated export with a header row. Short rows are padded
/// with empty cells by the column lookup, so `flexible` is safe here.
pub fn read_csv(bytes: &[u8]) -> ReportResult<RawTable> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ReportError::Signature(format!("CSV is not valid UTF-8: {e}")))?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::text).collect());
    }

    Ok(RawTable { headers, rows })
}
