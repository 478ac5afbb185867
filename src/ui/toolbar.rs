//! Toolbar: Platzierungsmodus, Zoom und Standort.

use crate::app::{AppIntent, AppState};

// ── SVG-Icon-Konstanten (compile-time eingebettet) ──────────────

const ICON_SIZE: egui::Vec2 = egui::Vec2::new(20.0, 20.0);

/// Erstellt ein `egui::Image` aus einer `ImageSource` in der gewünschten Größe.
fn svg_icon(source: egui::ImageSource<'_>, size: egui::Vec2) -> egui::Image<'_> {
    egui::Image::new(source).fit_to_exact_size(size)
}

/// Rendert die Toolbar und gibt erzeugte Events zurück.
///
/// Solange das Karten-SDK lädt, sind alle Buttons deaktiviert.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let enabled = state.is_sdk_loaded();
    let placing = state.map_view.placement_mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                // ── Platzierungsmodus ──
                let (icon, label) = if placing {
                    (egui::include_image!("../../assets/icon_stop.svg"), "Stop")
                } else {
                    (
                        egui::include_image!("../../assets/icon_add_trash_can.svg"),
                        "Add trash can",
                    )
                };
                let toggle_btn = egui::Button::image_and_text(svg_icon(icon, ICON_SIZE), label);
                if ui.add(toggle_btn.selected(placing)).clicked() {
                    events.push(AppIntent::PlacementModeToggled);
                }

                ui.separator();

                // ── Zoom ──
                let zoom_in = svg_icon(
                    egui::include_image!("../../assets/icon_zoom_in.svg"),
                    ICON_SIZE,
                );
                if ui
                    .add(egui::Button::image(zoom_in))
                    .on_hover_text("Zoom in")
                    .clicked()
                {
                    events.push(AppIntent::ZoomInRequested);
                }

                let zoom_out = svg_icon(
                    egui::include_image!("../../assets/icon_zoom_out.svg"),
                    ICON_SIZE,
                );
                if ui
                    .add(egui::Button::image(zoom_out))
                    .on_hover_text("Zoom out")
                    .clicked()
                {
                    events.push(AppIntent::ZoomOutRequested);
                }

                ui.separator();

                // ── Locate ──
                let locating = state.ui.locate.in_flight;
                let locate_icon = svg_icon(
                    egui::include_image!("../../assets/icon_locate.svg"),
                    ICON_SIZE,
                );
                let locate_btn = egui::Button::image_and_text(locate_icon, "Locate me");
                if ui
                    .add_enabled(!locating, locate_btn)
                    .on_hover_text("Center the map on your location")
                    .clicked()
                {
                    events.push(AppIntent::LocateRequested);
                }
                if locating {
                    ui.spinner();
                }

                if placing {
                    ui.separator();
                    ui.label("Click the map to place a trash can");
                }
            });
        });
    });

    events
}
