//! Handler für Viewport-Befehle.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoCoordinate;

/// Zentriert die Karte und zoomt auf die feste Nah-Stufe.
pub fn recenter_on(state: &mut AppState, coordinate: GeoCoordinate) {
    use_cases::viewport::recenter_on(state, coordinate);
}

/// Ändert den Zoom relativ (Zoom-Buttons).
pub fn zoom_by(state: &mut AppState, delta: f64) {
    use_cases::viewport::zoom_by(state, delta);
}

/// Übernimmt einen durch Gesten geänderten Zoom.
pub fn sync_zoom(state: &mut AppState, zoom: f64) {
    use_cases::viewport::sync_zoom(state, zoom);
}
