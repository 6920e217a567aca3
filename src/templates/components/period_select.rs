use maud::{html, Markup};

use crate::domain::pay_period::PayPeriod;

/// Plain navigation between the static per-period pages; script.js follows the selected value.
pub fn period_select(periods: &[PayPeriod], shown: &PayPeriod) -> Markup {
    html! {
        div class="period-picker" {
            label for="period-select" { "Pay period: " }
            select id="period-select" name="period" {
                @for period in periods {
                    option value=(period.filename()) selected[period.index == shown.index] {
                        (period.label())
                    }
                }
            }
        }
    }
}
