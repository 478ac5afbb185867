use crate::services::GeocodeHit;

/// Zustand des Such-Widgets
#[derive(Debug, Clone, Default)]
pub struct SearchWidgetState {
    /// Eingabetext (wird direkt vom Textfeld bearbeitet)
    pub query: String,
    /// ID der laufenden Anfrage
    pub in_flight: Option<u64>,
    /// Treffer der letzten Suche
    pub results: Vec<GeocodeHit>,
    /// Fehlermeldung der letzten Suche
    pub error: Option<String>,
    /// Zuletzt vergebene Anfrage-ID
    pub last_request_id: u64,
}

impl SearchWidgetState {
    /// Erstellt ein leeres Such-Widget.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Zustand des Locate-Widgets
#[derive(Debug, Clone, Default)]
pub struct LocateWidgetState {
    /// Ob eine Standortabfrage läuft
    pub in_flight: bool,
    /// Fehlermeldung der letzten Abfrage
    pub error: Option<String>,
}

/// UI-bezogener Zustand der Kind-Widgets
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Such-Widget
    pub search: SearchWidgetState,
    /// Locate-Widget
    pub locate: LocateWidgetState,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            search: SearchWidgetState::new(),
            locate: LocateWidgetState::default(),
            status_message: None,
        }
    }
}
