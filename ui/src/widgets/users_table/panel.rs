//! Main panel for the users table.

use chrono::Local;
use egui::{Response, TextEdit, Ui};
use roster_business::{LoadState, TableView};

use super::paginator::paginator;
use super::state::UsersTableUiState;
use super::table::render_users_table;
use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

/// Displays the filter, the current page of users and the paginator.
///
/// Starts the fetch on first render.
pub fn users_table(
    table: &mut TableView,
    ui_state: &mut UsersTableUiState,
    ui: &mut Ui,
) -> Response {
    table.initialize();

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.label("Filter");
            let response = ui.add(
                TextEdit::singleline(&mut ui_state.filter_input)
                    .hint_text("Ex. Leanne")
                    .desired_width(240.0),
            );
            if response.changed() {
                table.on_filter_change(&ui_state.filter_input);
            }
        });

        ui.add_space(8.0);
        render_status(table, ui);
        ui.add_space(4.0);

        render_users_table(table, ui);
        render_empty_hint(table, ui);

        ui.separator();
        paginator(table, ui);
    })
    .response
}

fn render_status(table: &TableView, ui: &mut Ui) {
    match table.load_state() {
        LoadState::Idle | LoadState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading users...");
            });
        }
        LoadState::Error(err) => {
            ui.colored_label(
                COLOR_RED,
                format!("Failed to load users ({}): {err}", err.kind()),
            );
        }
        LoadState::Loaded => {
            let total = table.view().total_count();
            let text = match table.loaded_at() {
                Some(at) => format!(
                    "{total} users, loaded at {}",
                    at.with_timezone(&Local).format("%H:%M:%S")
                ),
                None => format!("{total} users"),
            };
            ui.colored_label(COLOR_GREEN, text);
        }
    }
}

fn render_empty_hint(table: &TableView, ui: &mut Ui) {
    if *table.load_state() != LoadState::Loaded {
        return;
    }

    let view = table.view();
    if view.total_count() == 0 {
        ui.colored_label(COLOR_AMBER, "No users");
    } else if view.filtered_count() == 0 {
        ui.colored_label(
            COLOR_AMBER,
            format!("No users match \"{}\"", view.filter_text()),
        );
    }
}
