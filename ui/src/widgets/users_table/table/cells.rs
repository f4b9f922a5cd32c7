//! Cell rendering functions for the users table.

use egui::{RichText, Ui};

/// Renders the numeric id in monospace.
#[inline]
pub fn render_id_cell(ui: &mut Ui, id: i64) {
    ui.label(RichText::new(id.to_string()).monospace());
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}
