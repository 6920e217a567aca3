use crate::domain::record::LogRecord;
use crate::templates::{data_table, desktop_layout, SiteNav};
use maud::{html, Markup};

pub fn full_data_page(nav: &SiteNav, log: &[LogRecord]) -> Markup {
    desktop_layout(
        "Full Data",
        nav,
        html! {
            h2 { "Full Data" }
            (data_table("full-data-table", log))
        },
    )
}
