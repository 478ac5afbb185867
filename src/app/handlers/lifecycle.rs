//! Handler für SDK-Laden, Kartenoberfläche, Remount und Beenden.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SurfaceId;

/// Markiert das Karten-SDK als geladen.
pub fn mark_sdk_loaded(state: &mut AppState) {
    use_cases::lifecycle::mark_sdk_loaded(state);
}

/// Übernimmt das Handle der initialisierten Kartenoberfläche.
pub fn attach_surface(state: &mut AppState, surface: SurfaceId, zoom: f64) {
    use_cases::lifecycle::attach_surface(state, surface, zoom);
}

/// Ersetzt die Kartenansicht durch eine frisch gemountete.
pub fn remount(state: &mut AppState) {
    use_cases::lifecycle::remount_map_view(state);
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
