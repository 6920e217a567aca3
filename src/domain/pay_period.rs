// src/domain/pay_period.rs

use chrono::{Duration, NaiveDate, NaiveDateTime};

pub const PERIOD_DAYS: i64 = 14;

/// Pages kept for the current period plus this many before it.
pub const PREVIOUS_PERIODS: usize = 10;

/// A fixed 14-day reporting window. Index 0 starts on the epoch, 2024-12-30.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayPeriod {
    pub index: i64,
    pub start: NaiveDate,
}

impl PayPeriod {
    pub fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 30).unwrap_or_default()
    }

    pub fn from_index(index: i64) -> Self {
        Self {
            index,
            start: Self::epoch() + Duration::days(index * PERIOD_DAYS),
        }
    }

    /// Floor division, so dates before the epoch land in negative periods.
    pub fn containing(date: NaiveDate) -> Self {
        let days = (date - Self::epoch()).num_days();
        Self::from_index(days.div_euclid(PERIOD_DAYS))
    }

    /// Inclusive last day.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(PERIOD_DAYS - 1)
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        Self::containing(at.date()).index == self.index
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..PERIOD_DAYS).map(move |offset| start + Duration::days(offset))
    }

    pub fn filename(&self) -> String {
        format!("two-week-summary-{}.html", self.start.format("%Y-%m-%d"))
    }

    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end().format("%Y-%m-%d")
        )
    }

    /// The period containing `today` followed by the previous ten, newest first.
    pub fn recent(today: NaiveDate) -> Vec<PayPeriod> {
        let current = Self::containing(today);
        (0..=PREVIOUS_PERIODS as i64)
            .map(|back| Self::from_index(current.index - back))
            .collect()
    }
}
