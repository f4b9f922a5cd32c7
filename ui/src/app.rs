use std::time::Duration;

use crate::{state::State, widgets};

pub const APP_TITLE: &str = "projeto-novo";

/// Keeps frames coming while the fetch is in flight.
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn title(&self) -> &'static str {
        APP_TITLE
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply a finished fetch before rendering
        self.state.users_table.sync();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.separator();

            let State {
                users_table,
                users_table_ui,
            } = &mut self.state;
            widgets::users_table(users_table, users_table_ui, ui);
        });

        if self.state.users_table.load_state().is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        }
    }
}
