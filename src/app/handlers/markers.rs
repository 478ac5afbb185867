//! Handler für Marker-Platzierung, Selektion und Platzierungsmodus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{GeoCoordinate, MarkerId};
use chrono::{DateTime, Local};

/// Hängt einen Marker an der Klickposition an.
pub fn place(state: &mut AppState, coordinate: GeoCoordinate, placed_at: DateTime<Local>) {
    use_cases::markers::place_marker(state, coordinate, placed_at);
}

/// Selektiert einen Marker (öffnet das Detail-Popup).
pub fn select(state: &mut AppState, marker_id: MarkerId) {
    use_cases::selection::select_marker(state, marker_id);
}

/// Hebt die Selektion auf (schließt das Detail-Popup).
pub fn clear_selection(state: &mut AppState) {
    use_cases::selection::clear(state);
}

/// Schaltet den Platzierungsmodus um.
pub fn toggle_placement_mode(state: &mut AppState) {
    use_cases::markers::toggle_placement_mode(state);
}
