//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, CurrentLocation};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if !state.is_sdk_loaded() {
                ui.label("Loading map…");
                return;
            }

            ui.label(format!("Trash cans: {}", state.marker_count()));

            ui.separator();

            ui.label(if state.map_view.placement_mode {
                "Mode: placing"
            } else {
                "Mode: browse"
            });

            ui.separator();

            match &state.map_view.viewport {
                Some(handle) => ui.label(format!("Zoom: {:.1}", handle.zoom())),
                None => ui.label("Zoom: –"),
            };

            ui.separator();

            let location = match state.map_view.current_location {
                CurrentLocation::Unknown => "Location: –".to_string(),
                CurrentLocation::Pending => "Location: …".to_string(),
                CurrentLocation::Known(c) => format!("Location: {}", c),
                CurrentLocation::Unavailable => "Location: unavailable".to_string(),
            };
            ui.label(location);

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
