use maud::{html, Markup, DOCTYPE};

pub const COMPANY: &str = "M&D General Contracting";

const DATATABLES_CSS: &str = "https://cdn.datatables.net/1.13.6/css/jquery.dataTables.min.css";
const JQUERY_JS: &str = "https://code.jquery.com/jquery-3.6.0.min.js";
const DATATABLES_JS: &str = "https://cdn.datatables.net/1.13.6/js/jquery.dataTables.min.js";

/// What the shared header links to.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteNav {
    pub show_form: bool,
}

pub fn desktop_layout(title: &str, nav: &SiteNav, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (COMPANY) " - " (title) }
                link rel="stylesheet" href="style.css";
                link rel="stylesheet" href=(DATATABLES_CSS);
                script src=(JQUERY_JS) {}
                script src=(DATATABLES_JS) {}
                script src="script.js" defer {}
            }
            body {
                header {
                    img src="M&D General Contracting_E4_Cropped.png" alt="M&D Logo" class="logo";
                    h1 { (COMPANY) }
                    nav {
                        ul {
                            li { a href="index.html" { "Home" } }
                            li { a href="full-data.html" { "Full Data" } }
                            li { a href="user-summary.html" { "User Summary" } }
                            li { a href="two-week-summary.html" { "2-Week Summary" } }
                            @if nav.show_form {
                                li { a href="submit.html" { "Submit Log" } }
                            }
                        }
                    }
                }
                main {
                    (content)
                }
            }
        }
    }
}
