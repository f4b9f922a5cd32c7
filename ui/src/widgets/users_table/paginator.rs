//! Page size selector and page navigation under the users table.

use egui::{Button, ComboBox, Response, Ui};
use roster_business::{PageEvent, TableView};

/// Renders the paginator and applies whatever page event it produced.
pub fn paginator(table: &mut TableView, ui: &mut Ui) -> Response {
    let view = table.view();
    let mut event: Option<PageEvent> = None;

    let response = ui
        .horizontal(|ui| {
            ui.label("Items per page:");
            let mut selected = view.page_size();
            ComboBox::from_id_salt("users_page_size")
                .selected_text(selected.to_string())
                .show_ui(ui, |ui| {
                    for &size in table.page_size_options() {
                        ui.selectable_value(&mut selected, size, size.to_string());
                    }
                });
            if selected != view.page_size() {
                event = Some(view.resize_page(selected));
            }

            ui.add_space(12.0);
            ui.label(view.range_label());
            ui.add_space(12.0);

            let has_previous = view.has_previous_page();
            let has_next = view.has_next_page();
            if nav_button(ui, "First", "First page", has_previous) {
                event = view.first_page();
            }
            if nav_button(ui, "Previous", "Previous page", has_previous) {
                event = view.previous_page();
            }
            if nav_button(ui, "Next", "Next page", has_next) {
                event = view.next_page();
            }
            if nav_button(ui, "Last", "Last page", has_next) {
                event = view.last_page();
            }
        })
        .response;

    if let Some(event) = event {
        table.on_page_change(event);
    }
    response
}

fn nav_button(ui: &mut Ui, text: &str, hover: &str, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(text))
        .on_hover_text(hover)
        .clicked()
}
