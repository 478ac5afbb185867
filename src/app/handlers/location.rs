//! Handler für Standortabfragen (Mount und Locate-Button).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoCoordinate;

/// Stößt die einmalige Standortabfrage der aktuellen Ansicht an.
pub fn request_current_position(state: &mut AppState) {
    use_cases::location::request_current_position(state);
}

/// Übernimmt den ermittelten Standort.
pub fn apply_current_position(state: &mut AppState, coordinate: GeoCoordinate) {
    use_cases::location::apply_current_position(state, coordinate);
}

/// Markiert den Standort als nicht verfügbar.
pub fn mark_unavailable(state: &mut AppState) {
    use_cases::location::mark_unavailable(state);
}

/// Stößt eine Locate-Abfrage an.
pub fn request_locate(state: &mut AppState) {
    use_cases::location::request_locate(state);
}

/// Schließt eine Locate-Abfrage ab.
pub fn finish_locate(state: &mut AppState, error: Option<String>) {
    use_cases::location::finish_locate(state, error);
}
