use crate::domain::pay_period::PayPeriod;
use crate::reports::PeriodReport;
use crate::templates::{calendar, data_table, desktop_layout, period_select, SiteNav};
use maud::{html, Markup};

/// One pay period's daily review and builder table, with a selector over `periods`.
pub fn two_week_page(nav: &SiteNav, report: &PeriodReport, periods: &[PayPeriod]) -> Markup {
    desktop_layout(
        "2-Week Summary",
        nav,
        html! {
            h2 { "2-Week Summary (" (report.period.label()) ")" }
            (period_select(periods, &report.period))

            h3 { "Daily Review" }
            (calendar(&report.days))

            h3 { "Builder Summary" }
            (data_table("builder-summary-table", &report.builders))
        },
    )
}
