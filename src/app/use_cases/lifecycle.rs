//! Use-Case-Funktionen für SDK-Laden, Kartenoberfläche und Remount.

use crate::app::state::{MapSdkStatus, MapViewState};
use crate::app::AppState;
use crate::core::{SurfaceId, ViewportHandle};

/// Markiert das Karten-SDK als geladen. Ab jetzt werden Interaktionen verarbeitet.
pub fn mark_sdk_loaded(state: &mut AppState) {
    if state.sdk_status == MapSdkStatus::Loaded {
        return;
    }
    state.sdk_status = MapSdkStatus::Loaded;
    log::info!("Karten-SDK geladen");
}

/// Speichert das Handle der Kartenoberfläche.
///
/// Ein erneutes Ready derselben Oberfläche ersetzt das Handle nicht, damit
/// noch nicht angewendete Befehle erhalten bleiben.
pub fn attach_surface(state: &mut AppState, surface: SurfaceId, zoom: f64) {
    if let Some(handle) = &state.map_view.viewport {
        if handle.surface() == surface {
            return;
        }
    }
    state.map_view.viewport = Some(ViewportHandle::new(surface, zoom));
    log::info!("Kartenoberfläche {:?} bereit (Zoom {:.1})", surface, zoom);
}

/// Ersetzt die Kartenansicht durch eine frisch gemountete.
///
/// Marker, Selektion, Platzierungsmodus, Standort und Viewport-Handle gehen
/// verloren. Die Onboarding-Sitzung bleibt erhalten. Offene Standortabfragen
/// der alten Ansicht werden anhand der Mount-ID später verworfen.
pub fn remount_map_view(state: &mut AppState) {
    let old = state.map_view.mount_id;
    let mount_id = state.next_mount_id();
    state.map_view = MapViewState::new(mount_id);
    log::info!("Kartenansicht neu gemountet ({:?} → {:?})", old, mount_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeoCoordinate, ViewportCommand};

    #[test]
    fn attach_surface_stores_handle_with_zoom() {
        let mut state = AppState::new();

        attach_surface(&mut state, SurfaceId(3), 12.0);

        let handle = state.map_view.viewport.as_ref().expect("Handle gesetzt");
        assert_eq!(handle.surface(), SurfaceId(3));
        assert_eq!(handle.zoom(), 12.0);
    }

    #[test]
    fn repeated_ready_of_same_surface_keeps_pending_commands() {
        let mut state = AppState::new();
        attach_surface(&mut state, SurfaceId(1), 12.0);
        let target = GeoCoordinate::new(1.0, 2.0);
        if let Some(handle) = state.map_view.viewport.as_mut() {
            handle.pan_to(target);
        }

        attach_surface(&mut state, SurfaceId(1), 12.0);

        let handle = state.map_view.viewport.as_ref().expect("Handle gesetzt");
        assert_eq!(handle.pending(), &[ViewportCommand::PanTo(target)]);
    }

    #[test]
    fn remount_resets_view_but_keeps_onboarding() {
        let mut state = AppState::new();
        state.map_view.placement_mode = true;
        state
            .map_view
            .markers
            .push(GeoCoordinate::new(1.0, 1.0), chrono::Local::now());
        state.onboarding.record_shown();
        let old_mount = state.map_view.mount_id;

        remount_map_view(&mut state);

        assert_ne!(state.map_view.mount_id, old_mount);
        assert!(state.map_view.markers.is_empty());
        assert!(!state.map_view.placement_mode);
        assert!(state.map_view.viewport.is_none());
        assert_eq!(state.onboarding.shown_count(), 1);
    }

    #[test]
    fn mark_sdk_loaded_is_idempotent() {
        let mut state = AppState::new();
        mark_sdk_loaded(&mut state);
        mark_sdk_loaded(&mut state);
        assert!(state.is_sdk_loaded());
    }
}
