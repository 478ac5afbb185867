//! Use-Cases für Kartenausschnitt und Zoom.

use crate::app::AppState;
use crate::core::GeoCoordinate;

/// Zentriert die Karte auf `coordinate` und setzt danach die Nah-Zoomstufe.
///
/// Pan und Zoom werden in dieser Reihenfolge eingereiht. Ohne bereite
/// Kartenoberfläche passiert nichts.
pub fn recenter_on(state: &mut AppState, coordinate: GeoCoordinate) {
    let zoom = state.options.recenter_zoom;
    let Some(handle) = state.map_view.viewport.as_mut() else {
        log::debug!("Recenter auf {} ohne Kartenoberfläche verworfen", coordinate);
        return;
    };
    handle.pan_to(coordinate);
    handle.set_zoom(zoom);
    log::info!("Karte auf {} zentriert (Zoom {:.0})", coordinate, zoom);
}

/// Ändert den Zoom relativ zur aktuellen Stufe.
pub fn zoom_by(state: &mut AppState, delta: f64) {
    if let Some(handle) = state.map_view.viewport.as_mut() {
        handle.zoom_by(delta);
    }
}

/// Übernimmt einen durch Gesten geänderten Zoom, ohne Befehle einzureihen.
pub fn sync_zoom(state: &mut AppState, zoom: f64) {
    if let Some(handle) = state.map_view.viewport.as_mut() {
        handle.sync_zoom(zoom);
    }
}
