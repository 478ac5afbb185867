use crate::app::CommandLog;
use crate::shared::MapOptions;

use super::{MapViewState, MountId, OnboardingSession, PendingRequests, UiState};

/// Ladezustand des Karten-SDKs (Tile-Quelle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapSdkStatus {
    /// SDK noch nicht bereit: nur Ladeanzeige, keine Interaktion
    #[default]
    Loading,
    /// SDK geladen
    Loaded,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Ladezustand des Karten-SDKs (einmal pro Prozess)
    pub sdk_status: MapSdkStatus,
    /// Zustand der aktuell gemounteten Kartenansicht
    pub map_view: MapViewState,
    /// Prozessweite Onboarding-Sitzung (überlebt Remounts)
    pub onboarding: OnboardingSession,
    /// Zustand der Kind-Widgets (Suche, Standort)
    pub ui: UiState,
    /// Ausstehende Anfragen an Hintergrunddienste
    pub requests: PendingRequests,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Beim Start geladene Optionen
    pub options: MapOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
    last_mount_id: u64,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(MapOptions::default())
    }

    /// Erstellt einen neuen App-State mit den angegebenen Optionen
    pub fn with_options(options: MapOptions) -> Self {
        let onboarding = OnboardingSession::new(options.onboarding_cap);
        Self {
            sdk_status: MapSdkStatus::Loading,
            map_view: MapViewState::new(MountId(1)),
            onboarding,
            ui: UiState::new(),
            requests: PendingRequests::default(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
            last_mount_id: 1,
        }
    }

    /// Gibt zurück, ob das Karten-SDK geladen ist.
    pub fn is_sdk_loaded(&self) -> bool {
        self.sdk_status == MapSdkStatus::Loaded
    }

    /// Gibt die Anzahl der Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.map_view.markers.len()
    }

    /// Vergibt die nächste Mount-ID.
    pub(crate) fn next_mount_id(&mut self) -> MountId {
        self.last_mount_id += 1;
        MountId(self.last_mount_id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
