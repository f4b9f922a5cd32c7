//! Row rendering for the users table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use roster_business::UserRecord;

use super::cells::{render_id_cell, render_text_cell};

/// Renders one user as ID, Name and Username cells.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, record: &UserRecord) {
    row.col(|ui| {
        render_id_cell(ui, record.id);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_text_cell(ui, &record.name);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_text_cell(ui, &record.username);
        draw_cell_bottom_border(ui);
    });
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
