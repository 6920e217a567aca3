// src/reports/two_week.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::pay_period::PayPeriod;
use crate::domain::record::LogRecord;
use crate::reports::TableRow;

/// Who touched which equipment on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayReview {
    pub date: NaiveDate,
    /// (operator, equipment ids in submission order), sorted by operator.
    pub operators: Vec<(String, Vec<String>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuilderSummaryRow {
    pub builder: String,
    pub completions: usize,
    pub issues: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodReport {
    pub period: PayPeriod,
    /// Always 14 entries; days without submissions have no operators.
    pub days: Vec<DayReview>,
    pub builders: Vec<BuilderSummaryRow>,
}

pub fn period_report(records: &[LogRecord], period: PayPeriod) -> PeriodReport {
    let in_period: Vec<&LogRecord> = records
        .iter()
        .filter(|r| period.contains(r.completed_at))
        .collect();

    let days = period
        .days()
        .map(|date| {
            let mut operators: BTreeMap<&str, Vec<String>> = BTreeMap::new();
            for r in in_period
                .iter()
                .filter(|r| r.completed_at.date() == date && !r.name.trim().is_empty())
            {
                operators
                    .entry(&r.name)
                    .or_default()
                    .push(r.equipment_id.clone());
            }
            DayReview {
                date,
                operators: operators
                    .into_iter()
                    .map(|(name, ids)| (name.to_string(), ids))
                    .collect(),
            }
        })
        .collect();

    // blank builders are left out, like blank operators above
    let mut builders: BTreeMap<&str, BuilderSummaryRow> = BTreeMap::new();
    for r in in_period.iter().filter(|r| !r.builder.trim().is_empty()) {
        let row = builders
            .entry(&r.builder)
            .or_insert_with(|| BuilderSummaryRow {
                builder: r.builder.clone(),
                completions: 0,
                issues: 0,
            });
        row.completions += 1;
        if r.has_issues() {
            row.issues += 1;
        }
    }

    PeriodReport {
        period,
        days,
        builders: builders.into_values().collect(),
    }
}

impl TableRow for BuilderSummaryRow {
    const HEADERS: &'static [&'static str] = &["Builder", "Completions", "Issues"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.builder.clone(),
            self.completions.to_string(),
            self.issues.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::{date, record};

    fn at(name: &str, ts: &str, lift: &str, builder: &str) -> LogRecord {
        let mut r = record(name, ts);
        r.equipment_id = lift.to_string();
        r.builder = builder.to_string();
        r
    }

    #[test]
    fn records_land_in_exactly_one_period() {
        let records = vec![
            at("Ana", "2025-01-12 23:59", "Boom Lift 1", "Acme"),
            at("Ben", "2025-01-13 00:00", "Boom Lift 2", "Acme"),
        ];
        let p0 = period_report(&records, PayPeriod::from_index(0));
        let p1 = period_report(&records, PayPeriod::from_index(1));

        let count = |p: &PeriodReport| p.builders.iter().map(|b| b.completions).sum::<usize>();
        assert_eq!(count(&p0), 1);
        assert_eq!(count(&p1), 1);
        assert_eq!(p0.days[13].operators[0].0, "Ana");
        assert_eq!(p1.days[0].operators[0].0, "Ben");
    }

    #[test]
    fn daily_review_groups_by_operator() {
        let records = vec![
            at("Ben", "2025-01-02 08:00", "Boom Lift 3", "Acme"),
            at("Ana", "2025-01-02 09:00", "Boom Lift 2", "Acme"),
            at("Ben", "2025-01-02 10:00", "Boom Lift 1", "Acme"),
        ];
        let report = period_report(&records, PayPeriod::containing(date(2025, 1, 2)));
        assert_eq!(report.days.len(), 14);

        let day = report.days.iter().find(|d| d.date == date(2025, 1, 2)).unwrap();
        assert_eq!(
            day.operators,
            vec![
                ("Ana".to_string(), vec!["Boom Lift 2".to_string()]),
                (
                    "Ben".to_string(),
                    vec!["Boom Lift 3".to_string(), "Boom Lift 1".to_string()]
                ),
            ]
        );
        assert_eq!(
            report.days.iter().filter(|d| d.operators.is_empty()).count(),
            13
        );
    }

    #[test]
    fn builder_summary_counts_issues() {
        let mut flagged = at("Ana", "2025-01-03 08:00", "Boom Lift 1", "Zenith");
        flagged.general_issues = "Hydraulic leak".to_string();
        let records = vec![
            flagged,
            at("Ben", "2025-01-03 09:00", "Boom Lift 2", "Acme"),
            at("Cy", "2025-01-04 09:00", "Boom Lift 2", "Zenith"),
        ];
        let report = period_report(&records, PayPeriod::from_index(0));
        assert_eq!(
            report.builders,
            vec![
                BuilderSummaryRow {
                    builder: "Acme".into(),
                    completions: 1,
                    issues: 0
                },
                BuilderSummaryRow {
                    builder: "Zenith".into(),
                    completions: 2,
                    issues: 1
                },
            ]
        );
    }

    #[test]
    fn blank_builders_and_operators_are_not_grouped() {
        let records = vec![
            at("Ana", "2025-01-03 08:00", "Boom Lift 1", "Acme"),
            at("", "2025-01-03 09:00", "Boom Lift 2", ""),
            at("Ben", "2025-01-03 10:00", "Boom Lift 3", "  "),
        ];
        let report = period_report(&records, PayPeriod::from_index(0));

        assert_eq!(report.builders.len(), 1);
        assert_eq!(report.builders[0].builder, "Acme");
        let day = report.days.iter().find(|d| d.date == date(2025, 1, 3)).unwrap();
        let names: Vec<_> = day.operators.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Ben"]);
    }

    #[test]
    fn empty_period_is_well_formed() {
        let report = period_report(&[], PayPeriod::from_index(5));
        assert_eq!(report.days.len(), 14);
        assert!(report.builders.is_empty());
        assert!(report.days.iter().all(|d| d.operators.is_empty()));
    }
}
