// src/reports/full_log.rs

use crate::domain::record::LogRecord;
use crate::reports::{fmt_cost, fmt_timestamp, TableRow};

/// Newest first. The sort is stable so equal timestamps keep input order.
pub fn full_log(records: &[LogRecord]) -> Vec<LogRecord> {
    let mut rows = records.to_vec();
    rows.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    rows
}

impl TableRow for LogRecord {
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "Boom Lift ID",
        "Completion time",
        "Builder",
        "Site",
        "Hours",
        "Oil Level",
        "Gas Level",
        "General Issues",
        "Continue to Maintenance or Complete",
        "Maintenance Work",
        "Cost of Maintenance",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.equipment_id.clone(),
            fmt_timestamp(self.completed_at),
            self.builder.clone(),
            self.site.clone(),
            self.hours_or_zero().to_string(),
            self.oil_level.clone(),
            self.gas_level.clone(),
            self.general_issues.clone(),
            self.next_step.clone(),
            self.maintenance.work.clone(),
            fmt_cost(self.maintenance.cost),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::record;

    #[test]
    fn sorted_newest_first_with_stable_ties() {
        let records = vec![
            record("a", "2025-01-03 09:00"),
            record("b", "2025-01-05 09:00"),
            record("c", "2025-01-03 09:00"),
        ];
        let names: Vec<_> = full_log(&records).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn cells_follow_headers() {
        let mut r = record("Ana", "2025-01-05 08:30");
        r.hours = Some(42);
        r.maintenance.cost = 10.0;
        let cells = r.cells();
        assert_eq!(cells.len(), LogRecord::HEADERS.len());
        assert_eq!(cells[2], "2025-01-05 08:30");
        assert_eq!(cells[5], "42");
        assert_eq!(cells[11], "10.00");
    }

    #[test]
    fn missing_hours_render_as_zero() {
        let r = record("Ana", "2025-01-05 08:30");
        assert_eq!(r.hours, None);
        assert_eq!(r.cells()[5], "0");
    }
}
