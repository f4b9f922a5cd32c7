//! Table header rendering for the users table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use roster_business::{SortKey, SortState};

/// Renders the clickable header; returns the column that was clicked, if any.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    sort: Option<SortState>,
) -> Option<SortKey> {
    let mut clicked = None;
    for key in SortKey::ALL {
        header.col(|ui| {
            if render_header_cell(ui, key, sort) {
                clicked = Some(key);
            }
        });
    }
    clicked
}

/// Column label with an arrow on the sorted column.
pub fn header_text(key: SortKey, sort: Option<SortState>) -> String {
    match sort {
        Some(state) if state.key == key => {
            format!("{} {}", key.label(), state.direction.arrow())
        }
        _ => key.label().to_owned(),
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, key: SortKey, sort: Option<SortState>) -> bool {
    ui.add(Button::new(RichText::new(header_text(key, sort)).strong()).frame(false))
        .on_hover_text(format!("Sort by {}", key.label()))
        .clicked()
}
