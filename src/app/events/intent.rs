use crate::app::state::MountId;
use crate::core::{GeoCoordinate, MarkerId, SurfaceId};
use crate::services::GeocodeHit;

/// Herkunft einer Recenter-Anfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecenterSource {
    /// Such-Widget (Geocoding-Treffer)
    Search,
    /// Locate-Widget (eigener Standort)
    Locate,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Lebenszyklus (nie durch die Ladesperre blockiert) ──
    /// Kartenansicht wurde gemountet
    MapViewMounted,
    /// Karte neu laden (Remount der Kartenansicht)
    MapViewReloadRequested,
    /// Karten-SDK meldet "geladen"
    MapSdkLoaded,
    /// Kartenoberfläche ist initialisiert
    MapSurfaceReady { surface: SurfaceId, zoom: f64 },
    /// Anwendung beenden
    ExitRequested,

    // ── Interaktion (erst nach MapSdkLoaded) ──
    /// Klick auf die Karte (nicht auf einen Marker)
    MapClicked { coordinate: GeoCoordinate },
    /// Klick auf einen Marker
    MarkerActivated { marker_id: MarkerId },
    /// Detail-Popup des Markers geschlossen
    MarkerDetailDismissed,
    /// "Add trash can" / "Stop" Button
    PlacementModeToggled,
    /// Onboarding-Hinweis geschlossen
    OnboardingAlertDismissed,
    /// Karte auf Koordinate zentrieren (Suche oder Locate)
    RecenterRequested {
        coordinate: GeoCoordinate,
        source: RecenterSource,
    },
    /// Zoom-Button "+"
    ZoomInRequested,
    /// Zoom-Button "−"
    ZoomOutRequested,
    /// Zoom durch Geste (Mausrad/Pinch) geändert
    MapZoomChanged { zoom: f64 },
    /// Suche abgeschickt
    SearchSubmitted { query: String },
    /// Suchtreffer ausgewählt
    SearchResultChosen { hit: GeocodeHit },
    /// Trefferliste geschlossen
    SearchResultsDismissed,
    /// Locate-Button gedrückt
    LocateRequested,

    // ── Antworten der Hintergrunddienste ──
    /// Mount-Standortabfrage erfolgreich
    CurrentPositionResolved {
        mount_id: MountId,
        coordinate: GeoCoordinate,
    },
    /// Mount-Standortabfrage abgelehnt oder fehlgeschlagen
    CurrentPositionUnavailable { mount_id: MountId, reason: String },
    /// Locate-Abfrage erfolgreich
    LocateResolved { coordinate: GeoCoordinate },
    /// Locate-Abfrage fehlgeschlagen
    LocateFailed { reason: String },
    /// Geocoding-Treffer eingetroffen
    SearchResultsReceived {
        request_id: u64,
        hits: Vec<GeocodeHit>,
    },
    /// Geocoding fehlgeschlagen
    SearchFailed { request_id: u64, reason: String },
}

impl AppIntent {
    /// Gibt zurück, ob der Intent eine Benutzerinteraktion ist, die bis zum
    /// Laden des Karten-SDKs verworfen wird.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            AppIntent::MapClicked { .. }
                | AppIntent::MarkerActivated { .. }
                | AppIntent::MarkerDetailDismissed
                | AppIntent::PlacementModeToggled
                | AppIntent::OnboardingAlertDismissed
                | AppIntent::RecenterRequested { .. }
                | AppIntent::ZoomInRequested
                | AppIntent::ZoomOutRequested
                | AppIntent::MapZoomChanged { .. }
                | AppIntent::SearchSubmitted { .. }
                | AppIntent::SearchResultChosen { .. }
                | AppIntent::SearchResultsDismissed
                | AppIntent::LocateRequested
        )
    }
}
