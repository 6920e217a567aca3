use crate::domain::equipment::AllowList;
use crate::domain::record::ServiceKind;
use crate::templates::{desktop_layout, SiteNav};
use maud::{html, Markup};

const LEVELS: &[&str] = &["Full", "3/4", "Half", "1/4", "Empty"];

/// Static data-entry form. Submissions go straight to `action`; nothing here receives them.
pub fn submit_page(nav: &SiteNav, action: &str, equipment: &AllowList) -> Markup {
    desktop_layout(
        "Submit Log",
        nav,
        html! {
            h2 { "Submit Boom Lift Log" }
            form class="log-form" method="post" action=(action) {
                label for="name" { "Name" }
                input type="text" id="name" name="name" required;

                label for="boom_lift_id" { "Boom Lift ID" }
                select id="boom_lift_id" name="boom_lift_id" required {
                    option value="" disabled selected { "Select a boom lift..." }
                    @for id in equipment.ids() {
                        option value=(id) { (id) }
                    }
                }

                label for="builder" { "Builder" }
                input type="text" id="builder" name="builder";

                label for="site" { "Site" }
                input type="text" id="site" name="site";

                label for="hours" { "Hours" }
                input type="number" id="hours" name="hours" min="0" step="1";

                label for="oil_level" { "Oil Level" }
                (level_select("oil_level"))

                label for="gas_level" { "Gas Level" }
                (level_select("gas_level"))

                label for="general_issues" { "General Issues" }
                textarea id="general_issues" name="general_issues" rows="3" {}

                label for="next_step" { "Continue to Maintenance or Complete" }
                select id="next_step" name="next_step" {
                    option value="Complete" { "Complete" }
                    option value="Continue to Maintenance" { "Continue to Maintenance" }
                }

                fieldset class="maintenance" {
                    legend { "Maintenance" }
                    @for kind in ServiceKind::ALL {
                        div class="service" {
                            input type="checkbox" id=(kind.field_name()) name=(kind.field_name()) value="yes";
                            label for=(kind.field_name()) { (kind.label()) }
                            input type="number" name=(format!("{}_cost", kind.field_name()))
                                min="0" step="0.01" placeholder="Cost";
                        }
                    }
                    div class="service" {
                        label for="other_work" { "Other Work" }
                        input type="text" id="other_work" name="other_work";
                        input type="number" name="other_work_cost" min="0" step="0.01" placeholder="Cost";
                    }
                }

                button type="submit" { "Submit" }
            }
        },
    )
}

fn level_select(name: &str) -> Markup {
    html! {
        select id=(name) name=(name) {
            @for level in LEVELS {
                option value=(level) { (level) }
            }
        }
    }
}
