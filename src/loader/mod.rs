pub mod columns;
mod delimited;
pub mod fetch;
pub mod table;
mod workbook;

use crate::domain::record::LogRecord;
use crate::errors::ReportResult;

pub use fetch::read_source;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Excel,
}

/// Parses raw export bytes into records with defaults filled in.
pub fn parse(bytes: &[u8], format: SourceFormat, sheet: &str) -> ReportResult<Vec<LogRecord>> {
    fetch::check_signature(bytes, format)?;
    let table = match format {
        SourceFormat::Csv => delimited::read_csv(bytes)?,
        SourceFormat::Excel => workbook::read_sheet(bytes, sheet)?,
    };
    columns::records_from_table(table)
}
