// templates/pages/home.rs

use crate::reports::EquipmentSummaryRow;
use crate::templates::{card, data_table, desktop_layout, SiteNav};
use maud::{html, Markup};

pub fn home_page(nav: &SiteNav, equipment: &[EquipmentSummaryRow]) -> Markup {
    desktop_layout(
        "Home",
        nav,
        html! {
            (card("Welcome", html! {
                p {
                    "This website tracks boom lift information submitted daily by M&D General Contracting's installers, "
                    "providing real-time insights into equipment usage and maintenance needs."
                }
            }))

            h2 { "Latest Boom Lift Summary" }
            (data_table("latest-boom-table", equipment))
        },
    )
}
