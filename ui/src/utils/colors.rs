//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for the loaded summary line.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for the fetch failure line.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for "nothing matches the filter".
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);
