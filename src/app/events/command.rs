use crate::core::{GeoCoordinate, MarkerId, SurfaceId};
use crate::services::GeocodeHit;
use chrono::{DateTime, Local};

/// Mutierende Commands, die vom Controller ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Lebenszyklus ──
    /// Karten-SDK als geladen markieren
    MarkSdkLoaded,
    /// Kartenoberfläche übernehmen (Viewport-Handle speichern)
    AttachSurface { surface: SurfaceId, zoom: f64 },
    /// Kartenansicht neu mounten
    RemountMapView,
    /// Anwendung beenden
    RequestExit,

    // ── Marker & Selektion ──
    /// Marker an Koordinate anhängen (nur im Platzierungsmodus)
    PlaceMarker {
        coordinate: GeoCoordinate,
        placed_at: DateTime<Local>,
    },
    /// Marker selektieren
    SelectMarker { marker_id: MarkerId },
    /// Selektion aufheben
    ClearSelection,

    // ── Platzierungsmodus & Onboarding ──
    /// Platzierungsmodus umschalten
    TogglePlacementMode,
    /// Onboarding-Hinweis anzeigen (sofern Obergrenze nicht erreicht)
    ShowOnboardingAlert,
    /// Onboarding-Hinweis schließen
    DismissOnboardingAlert,

    // ── Viewport ──
    /// Pan auf Koordinate, dann feste Nah-Zoomstufe
    RecenterOn { coordinate: GeoCoordinate },
    /// Zoom relativ ändern
    ZoomBy { delta: f64 },
    /// Zoom nach Geste übernehmen
    SyncZoom { zoom: f64 },

    // ── Standort ──
    /// Einmalige Standortabfrage für die aktuelle Ansicht anstoßen
    RequestCurrentPosition,
    /// Standort übernehmen
    ApplyCurrentPosition { coordinate: GeoCoordinate },
    /// Standort als nicht verfügbar markieren
    MarkCurrentPositionUnavailable,
    /// Locate-Abfrage anstoßen
    RequestLocate,
    /// Locate-Abfrage abgeschlossen (mit optionalem Fehler)
    FinishLocate { error: Option<String> },

    // ── Suche ──
    /// Suche anstoßen
    SubmitSearch { query: String },
    /// Treffer übernehmen
    ApplySearchResults { request_id: u64, hits: Vec<GeocodeHit> },
    /// Suche fehlgeschlagen
    FailSearch { request_id: u64, reason: String },
    /// Trefferliste leeren
    ClearSearchResults,
}
