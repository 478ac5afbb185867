//! Use-Cases für Marker-Platzierung und Platzierungsmodus.

use crate::app::AppState;
use crate::core::GeoCoordinate;
use chrono::{DateTime, Local};

/// Hängt einen Marker an, falls der Platzierungsmodus aktiv ist.
///
/// Keine Bereichsprüfung: das Karten-Widget liefert nur gültige Koordinaten.
pub fn place_marker(state: &mut AppState, coordinate: GeoCoordinate, placed_at: DateTime<Local>) {
    if !state.map_view.placement_mode {
        log::debug!("Klick auf {} ohne Platzierungsmodus ignoriert", coordinate);
        return;
    }

    let id = state.map_view.markers.push(coordinate, placed_at);
    log::info!(
        "Mülleimer {} bei {} gesetzt ({} gesamt)",
        id,
        coordinate,
        state.map_view.markers.len()
    );
}

/// Schaltet den Platzierungsmodus um.
pub fn toggle_placement_mode(state: &mut AppState) {
    state.map_view.placement_mode = !state.map_view.placement_mode;
    log::info!(
        "Platzierungsmodus {}",
        if state.map_view.placement_mode {
            "aktiv"
        } else {
            "beendet"
        }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_marker_appends_in_click_order() {
        let mut state = AppState::new();
        state.map_view.placement_mode = true;
        let clicks = [
            GeoCoordinate::new(43.66, -79.38),
            GeoCoordinate::new(43.70, -79.40),
            GeoCoordinate::new(43.66, -79.38),
        ];

        for c in clicks {
            place_marker(&mut state, c, Local::now());
        }

        let placed: Vec<_> = state.map_view.markers.iter().map(|m| m.position()).collect();
        assert_eq!(placed, clicks.to_vec());
    }

    #[test]
    fn place_marker_without_placement_mode_is_noop() {
        let mut state = AppState::new();

        place_marker(&mut state, GeoCoordinate::new(1.0, 2.0), Local::now());

        assert!(state.map_view.markers.is_empty());
    }

    #[test]
    fn toggle_flips_flag() {
        let mut state = AppState::new();
        toggle_placement_mode(&mut state);
        assert!(state.map_view.placement_mode);
        toggle_placement_mode(&mut state);
        assert!(!state.map_view.placement_mode);
    }
}
