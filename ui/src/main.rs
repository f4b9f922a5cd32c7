#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use log::{info, warn};
use roster_business::BusinessConfig;
use roster_ui::state::State;
use roster_ui::{APP_TITLE, RosterApp};

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BusinessConfig::from_env().unwrap_or_else(|err| {
        warn!("Invalid configuration, falling back to defaults: {err}");
        BusinessConfig::default()
    });
    info!("Users endpoint: {}", config.users_url);

    // The fetch runs here; the runtime must outlive the event loop.
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let handle = runtime.handle().clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |_cc| {
            let state = State::new(&config, handle);
            Ok(Box::new(RosterApp::new(state)))
        }),
    )
}
