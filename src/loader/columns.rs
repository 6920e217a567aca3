// src/loader/columns.rs

use std::collections::HashMap;

use crate::domain::record::{LogRecord, Maintenance, ServiceKind};
use crate::errors::{ReportError, ReportResult};
use crate::loader::table::{Cell, RawTable};

pub const NAME: &str = "Name";
pub const EQUIPMENT_ID: &str = "Boom Lift ID";
pub const COMPLETION_TIME: &str = "Completion time";
pub const BUILDER: &str = "Builder";
pub const SITE: &str = "Site";
pub const HOURS: &str = "Hours";
pub const OIL_LEVEL: &str = "Oil Level";
pub const GAS_LEVEL: &str = "Gas Level";
pub const GENERAL_ISSUES: &str = "General Issues";
pub const NEXT_STEP: &str = "Continue to Maintenance or Complete";
pub const MAINTENANCE_WORK: &str = "Maintenance Work";
pub const MAINTENANCE_COST: &str = "Cost of Maintenance";
pub const OTHER_WORK: &str = "Other Work";
pub const OTHER_WORK_COST: &str = "Other Work Cost";

const REQUIRED: [&str; 3] = [NAME, EQUIPMENT_ID, COMPLETION_TIME];

static EMPTY: Cell = Cell::Empty;

/// Header name to column position.
struct ColumnMap {
    index: HashMap<String, usize>,
}

impl ColumnMap {
    fn new(headers: &[String]) -> ReportResult<Self> {
        let mut index = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            // first occurrence wins on duplicated headers
            index.entry(header.trim().to_string()).or_insert(i);
        }

        for column in REQUIRED {
            if !index.contains_key(column) {
                return Err(ReportError::MissingColumn(column.to_string()));
            }
        }

        Ok(Self { index })
    }

    fn cell<'r>(&self, row: &'r [Cell], column: &str) -> &'r Cell {
        self.index
            .get(column)
            .and_then(|&i| row.get(i))
            .unwrap_or(&EMPTY)
    }

    fn text(&self, row: &[Cell], column: &str) -> String {
        self.cell(row, column).as_text()
    }
}

/// Converts a parsed sheet into records, applying the fill-default policy:
/// blank text becomes "", blank costs become 0, blank flags are unset and blank
/// hours stay absent.
/// A missing or unparsable completion time is fatal.
pub fn records_from_table(table: RawTable) -> ReportResult<Vec<LogRecord>> {
    let columns = ColumnMap::new(&table.headers)?;
    let mut records = Vec::with_capacity(table.rows.len());

    for (i, row) in table.rows.iter().enumerate() {
        if row.iter().all(Cell::is_empty) {
            continue;
        }

        let time_cell = columns.cell(row, COMPLETION_TIME);
        let completed_at =
            time_cell
                .as_timestamp()
                .ok_or_else(|| ReportError::InvalidTimestamp {
                    row: i + 1,
                    value: time_cell.as_text(),
                })?;

        records.push(LogRecord {
            name: columns.text(row, NAME),
            equipment_id: columns.text(row, EQUIPMENT_ID),
            completed_at,
            builder: columns.text(row, BUILDER),
            site: columns.text(row, SITE),
            hours: columns.cell(row, HOURS).as_hours(),
            oil_level: columns.text(row, OIL_LEVEL),
            gas_level: columns.text(row, GAS_LEVEL),
            general_issues: columns.text(row, GENERAL_ISSUES),
            next_step: columns.text(row, NEXT_STEP),
            maintenance: maintenance(&columns, row),
        });
    }

    Ok(records)
}

/// Merges the free-text layout and the checkbox layout into one description.
fn maintenance(columns: &ColumnMap, row: &[Cell]) -> Maintenance {
    let mut parts: Vec<String> = Vec::new();
    let mut cost = columns.cell(row, MAINTENANCE_COST).as_cost();

    let free_text = columns.text(row, MAINTENANCE_WORK);
    if !free_text.is_empty() {
        parts.push(free_text);
    }

    for kind in ServiceKind::ALL {
        if columns.cell(row, kind.label()).as_flag() {
            parts.push(kind.label().to_string());
        }
        cost += columns.cell(row, kind.cost_column()).as_cost();
    }

    let other = columns.text(row, OTHER_WORK);
    if !other.is_empty() {
        parts.push(other);
    }
    cost += columns.cell(row, OTHER_WORK_COST).as_cost();

    Maintenance {
        work: parts.join("; "),
        cost,
    }
}
