//! Use-Cases für Standortabfragen.
//!
//! Die Abfrage beim Mount ist an die Mount-ID der Ansicht gebunden; das
//! Verwerfen veralteter Antworten passiert schon im Intent-Mapping.

use crate::app::state::{CurrentLocation, LocationPurpose};
use crate::app::AppState;
use crate::core::GeoCoordinate;

/// Stellt die einmalige Standortabfrage der aktuellen Ansicht in die Warteschlange.
pub fn request_current_position(state: &mut AppState) {
    if state.map_view.current_location != CurrentLocation::Unknown {
        log::debug!("Standort der Ansicht bereits angefragt");
        return;
    }
    let purpose = LocationPurpose::Mount(state.map_view.mount_id);
    state.requests.location.push(purpose);
    state.map_view.current_location = CurrentLocation::Pending;
}

/// Übernimmt den Standort der aktuellen Ansicht.
pub fn apply_current_position(state: &mut AppState, coordinate: GeoCoordinate) {
    state.map_view.current_location = CurrentLocation::Known(coordinate);
    log::info!("Eigener Standort: {}", coordinate);
}

/// Markiert den Standort als nicht verfügbar. Es wird kein Marker gezeichnet.
pub fn mark_unavailable(state: &mut AppState) {
    state.map_view.current_location = CurrentLocation::Unavailable;
}

/// Stellt eine Locate-Abfrage in die Warteschlange (höchstens eine gleichzeitig).
pub fn request_locate(state: &mut AppState) {
    if state.ui.locate.in_flight {
        return;
    }
    state.ui.locate.in_flight = true;
    state.ui.locate.error = None;
    state.ui.status_message = None;
    state.requests.location.push(LocationPurpose::Locate);
}

/// Schließt die Locate-Abfrage ab.
pub fn finish_locate(state: &mut AppState, error: Option<String>) {
    state.ui.locate.in_flight = false;
    match &error {
        Some(reason) => {
            log::warn!("Standort konnte nicht ermittelt werden: {}", reason);
            state.ui.status_message = Some(format!("Location unavailable: {}", reason));
        }
        None => state.ui.status_message = None,
    }
    state.ui.locate.error = error;
}
