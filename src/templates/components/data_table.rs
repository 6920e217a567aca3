use maud::{html, Markup};

use crate::reports::TableRow;

/// `table.data-table` picked up by DataTables in script.js. An empty slice
/// still renders the header row.
pub fn data_table<R: TableRow>(id: &str, rows: &[R]) -> Markup {
    html! {
        div class="table-container" {
            table class="data-table" id=(id) {
                thead {
                    tr {
                        @for header in R::HEADERS {
                            th { (header) }
                        }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            @for cell in row.cells() {
                                td { (cell) }
                            }
                        }
                    }
                }
            }
        }
    }
}
