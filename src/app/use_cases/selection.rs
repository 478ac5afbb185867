//! Use-Cases für die Marker-Selektion.

use crate::app::AppState;
use crate::core::MarkerId;

/// Selektiert einen Marker. Idempotent; unbekannte IDs werden ignoriert.
pub fn select_marker(state: &mut AppState, marker_id: MarkerId) {
    if !state.map_view.markers.contains(marker_id) {
        log::debug!("Marker {} existiert nicht, Selektion unverändert", marker_id);
        return;
    }
    state.map_view.selection.selected_marker = Some(marker_id);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    state.map_view.selection.selected_marker = None;
}
