// src/reports/user_summary.rs

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::domain::record::LogRecord;
use crate::reports::{fmt_timestamp, TableRow};

#[derive(Debug, Clone, PartialEq)]
pub struct UserSummaryRow {
    pub name: String,
    pub submissions: usize,
    pub latest: NaiveDateTime,
    pub issues: usize,
}

/// One row per operator name, sorted by name. Submissions without a name are
/// not attributed to anyone.
pub fn user_summary(records: &[LogRecord]) -> Vec<UserSummaryRow> {
    let mut by_name: BTreeMap<&str, UserSummaryRow> = BTreeMap::new();

    for r in records.iter().filter(|r| !r.name.trim().is_empty()) {
        let row = by_name.entry(&r.name).or_insert_with(|| UserSummaryRow {
            name: r.name.clone(),
            submissions: 0,
            latest: r.completed_at,
            issues: 0,
        });
        row.submissions += 1;
        row.latest = row.latest.max(r.completed_at);
        if r.has_issues() {
            row.issues += 1;
        }
    }

    by_name.into_values().collect()
}

impl TableRow for UserSummaryRow {
    const HEADERS: &'static [&'static str] = &["Name", "Submissions", "Latest Submission", "Issues"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.submissions.to_string(),
            fmt_timestamp(self.latest),
            self.issues.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::record;

    #[test]
    fn counts_submissions_latest_and_issues() {
        let mut flagged = record("Ben", "2025-01-04 10:00");
        flagged.general_issues = "Flat tire".to_string();
        let records = vec![
            record("Cy", "2025-01-02 10:00"),
            record("Ben", "2025-01-06 10:00"),
            flagged,
            record("Ana", "2025-01-01 10:00"),
        ];

        let rows = user_summary(&records);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Ben", "Cy"]);

        let ben = &rows[1];
        assert_eq!(ben.submissions, 2);
        assert_eq!(ben.issues, 1);
        assert_eq!(fmt_timestamp(ben.latest), "2025-01-06 10:00");
    }

    #[test]
    fn unnamed_submissions_are_skipped() {
        let records = vec![record("", "2025-01-02 10:00"), record("Ana", "2025-01-03 10:00")];
        let rows = user_summary(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ana");
    }

    #[test]
    fn empty_log_has_no_rows() {
        assert!(user_summary(&[]).is_empty());
    }
}
