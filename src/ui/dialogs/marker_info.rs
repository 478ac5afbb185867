use crate::app::AppIntent;
use crate::core::TrashCanMarker;
use crate::shared::format_relative;
use chrono::Local;

/// Zeigt das Detail-Popup eines selektierten Markers an seiner Bildschirmposition.
pub fn show_marker_info(
    ctx: &egui::Context,
    marker: &TrashCanMarker,
    anchor: egui::Pos2,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Area::new(egui::Id::new("marker_info").with(marker.id().0))
        .fixed_pos(anchor)
        .pivot(egui::Align2::CENTER_BOTTOM)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.strong("Trash Can Placed");
                    if ui.small_button("✕").clicked() {
                        events.push(AppIntent::MarkerDetailDismissed);
                    }
                });
                ui.label(format_relative(&marker.placed_at(), &Local::now()));
                ui.weak(marker.position().to_string());
            });
        });

    events
}
