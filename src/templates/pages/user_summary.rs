use crate::reports::UserSummaryRow;
use crate::templates::{data_table, desktop_layout, SiteNav};
use maud::{html, Markup};

pub fn user_summary_page(nav: &SiteNav, users: &[UserSummaryRow]) -> Markup {
    desktop_layout(
        "User Summary",
        nav,
        html! {
            h2 { "User Summary" }
            (data_table("user-summary-table", users))
        },
    )
}
