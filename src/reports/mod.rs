// src/reports/mod.rs
//
// Pure transforms from the filtered log into the views rendered on each page.

pub mod equipment_summary;
pub mod full_log;
pub mod two_week;
pub mod user_summary;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::equipment::AllowList;
use crate::domain::pay_period::PayPeriod;
use crate::domain::record::LogRecord;

pub use equipment_summary::EquipmentSummaryRow;
pub use two_week::{DayReview, PeriodReport};
pub use user_summary::UserSummaryRow;

/// Shown in place of a derived value that has no source record.
pub const NO_DATA: &str = "No Data Available";

/// A view row that knows its column headers and how to print each cell.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Everything the pages need, computed once per run.
#[derive(Debug)]
pub struct Views {
    pub full_log: Vec<LogRecord>,
    pub equipment: Vec<EquipmentSummaryRow>,
    pub users: Vec<UserSummaryRow>,
    /// Current period first.
    pub periods: Vec<PeriodReport>,
}

impl Views {
    /// `records` must already be restricted to the allow-list.
    pub fn build(records: &[LogRecord], equipment: &AllowList, today: NaiveDate) -> Self {
        Self {
            full_log: full_log::full_log(records),
            equipment: equipment_summary::equipment_summary(records, equipment),
            users: user_summary::user_summary(records),
            periods: PayPeriod::recent(today)
                .into_iter()
                .map(|period| two_week::period_report(records, period))
                .collect(),
        }
    }
}

/// Most recent record. Among equal timestamps the one seen last wins,
/// which is what `max_by_key` guarantees.
pub fn latest<'a, I>(records: I) -> Option<&'a LogRecord>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    records.into_iter().max_by_key(|r| r.completed_at)
}

pub fn fmt_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

pub fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn fmt_cost(cost: f64) -> String {
    format!("{cost:.2}")
}

pub fn or_no_data<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| v.to_string())
}
