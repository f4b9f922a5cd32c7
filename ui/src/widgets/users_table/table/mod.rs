//! Table components for the users table:
//! - `columns`: Column definitions and widths
//! - `header`: Sortable header row
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use roster_business::TableView;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders the current page and forwards header clicks to the sort handler.
pub fn render_users_table(table: &mut TableView, ui: &mut Ui) {
    let view = table.view();
    let sort = view.sort();
    let rows = view.page_rows();
    let mut clicked = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            clicked = render_table_header(&mut header, sort);
        })
        .body(|mut body| {
            for record in rows {
                body.row(ROW_HEIGHT, |mut row| render_user_row(&mut row, record));
            }
        });

    if let Some(key) = clicked {
        table.on_sort_change(key);
    }
}
