//! UI-Komponenten: Karte, Menü, Toolbar, Such-Widget, Dialoge, Status-Bar.

pub mod dialogs;
/// UI-Layer mit egui
///
/// Jede Komponente rendert aus dem `AppState` und gibt `AppIntent`s zurück.
/// Mutationen laufen ausschließlich über den Controller.
pub mod map_panel;
pub mod menu;
pub mod search;
pub mod status;
pub mod toolbar;

pub use dialogs::{show_marker_info, show_onboarding_alert};
pub use map_panel::MapPanel;
pub use menu::render_menu;
pub use search::render_search_widget;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
