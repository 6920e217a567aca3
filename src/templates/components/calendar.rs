use maud::{html, Markup};

use crate::reports::DayReview;

pub fn calendar(days: &[DayReview]) -> Markup {
    html! {
        div class="calendar" {
            div class="calendar-grid" {
                @for day in days {
                    div class="calendar-day" {
                        h4 { (day.date.format("%a, %b %d")) }
                        @if day.operators.is_empty() {
                            p class="no-submissions" { "No submissions" }
                        } @else {
                            @for (name, lifts) in &day.operators {
                                p { strong { (name) } ": " (lifts.join(", ")) }
                            }
                        }
                    }
                }
            }
        }
    }
}
