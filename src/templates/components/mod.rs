use maud::{html, Markup};

pub mod calendar;
pub mod data_table;
pub mod period_select;

pub use calendar::calendar;
pub use data_table::data_table;
pub use period_select::period_select;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="summary" {
            h2 { (title) }
            (body)
        }
    }
}
