// src/reports/equipment_summary.rs

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::equipment::AllowList;
use crate::domain::record::LogRecord;
use crate::reports::{fmt_date, fmt_timestamp, latest, or_no_data, TableRow, NO_DATA};

const OIL_CHANGE: &str = "oil change";
const ANNUAL_INSPECTION: &str = "annual inspection";

/// Status fields of the newest submission for one piece of equipment.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentStatus {
    pub completed_at: NaiveDateTime,
    pub name: String,
    pub hours: u32,
    pub oil_level: String,
    pub gas_level: String,
    pub general_issues: String,
}

/// One row per allow-listed identifier, present even with no submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentSummaryRow {
    pub equipment_id: String,
    pub current: Option<CurrentStatus>,
    pub last_maintenance: Option<NaiveDate>,
    pub oil_change_hours: Option<u32>,
    pub hours_since_oil_change: Option<i64>,
    pub annual_inspection_hours: Option<u32>,
}

/// Rows are sorted by identifier. Each derived column is looked up
/// independently, so an identifier with a current status but no matching
/// maintenance gets `None` for that column only.
pub fn equipment_summary(records: &[LogRecord], equipment: &AllowList) -> Vec<EquipmentSummaryRow> {
    let mut ids: Vec<&String> = equipment.ids().iter().collect();
    ids.sort();

    ids.into_iter()
        .map(|id| {
            let mine: Vec<&LogRecord> = records.iter().filter(|r| &r.equipment_id == id).collect();

            let current = latest(mine.iter().copied());
            let last_maintenance =
                latest(mine.iter().copied().filter(|r| r.maintenance.has_work()))
                    .map(|r| r.completed_at.date());
            let oil_change =
                latest(mine.iter().copied().filter(|r| r.maintenance.mentions(OIL_CHANGE)));
            let annual_inspection_hours = latest(
                mine.iter()
                    .copied()
                    .filter(|r| r.maintenance.mentions(ANNUAL_INSPECTION)),
            )
            .map(LogRecord::hours_or_zero);

            // only actual meter readings are subtracted, never a filled-in 0
            let hours_since_oil_change =
                match (current.and_then(|r| r.hours), oil_change.and_then(|r| r.hours)) {
                    (Some(now), Some(at_change)) => Some(i64::from(now) - i64::from(at_change)),
                    _ => None,
                };

            EquipmentSummaryRow {
                equipment_id: id.clone(),
                current: current.map(|r| CurrentStatus {
                    completed_at: r.completed_at,
                    name: r.name.clone(),
                    hours: r.hours_or_zero(),
                    oil_level: r.oil_level.clone(),
                    gas_level: r.gas_level.clone(),
                    general_issues: r.general_issues.clone(),
                }),
                last_maintenance,
                oil_change_hours: oil_change.map(LogRecord::hours_or_zero),
                hours_since_oil_change,
                annual_inspection_hours,
            }
        })
        .collect()
}

impl TableRow for EquipmentSummaryRow {
    const HEADERS: &'static [&'static str] = &[
        "Boom Lift ID",
        "Completion time",
        "Name",
        "Hours",
        "Oil Level",
        "Gas Level",
        "General Issues",
        "Last Maintenance",
        "Oil Change",
        "Hours Since Oil Change",
        "Annual Inspection",
    ];

    fn cells(&self) -> Vec<String> {
        let mut cells = vec![self.equipment_id.clone()];

        match &self.current {
            Some(c) => cells.extend([
                fmt_timestamp(c.completed_at),
                c.name.clone(),
                c.hours.to_string(),
                c.oil_level.clone(),
                c.gas_level.clone(),
                c.general_issues.clone(),
            ]),
            None => cells.extend(std::iter::repeat(NO_DATA.to_string()).take(6)),
        }

        cells.extend([
            or_no_data(self.last_maintenance.map(fmt_date)),
            or_no_data(self.oil_change_hours),
            or_no_data(self.hours_since_oil_change),
            or_no_data(self.annual_inspection_hours),
        ]);
        cells
    }
}
