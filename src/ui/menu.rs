//! Top-Menü (Map, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Map", |ui| {
                if ui.button("Reload map").clicked() {
                    events.push(AppIntent::MapViewReloadRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                ui.label(format!("Trash Can Map v{}", env!("CARGO_PKG_VERSION")));
                ui.label(format!("Tiles: © {}", state.options.style.attribution()));
            });
        });
    });

    events
}
