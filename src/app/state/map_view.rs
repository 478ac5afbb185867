use crate::core::{GeoCoordinate, MarkerList, ViewportHandle};

use super::SelectionState;

/// Kennung einer Mount-Lebensdauer der Kartenansicht.
///
/// Späte Antworten des Standortdienstes werden nur übernommen, wenn ihre
/// Mount-ID zur aktuellen Ansicht passt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(pub u64);

/// Ergebnis der einmaligen Standortabfrage beim Mount.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CurrentLocation {
    /// Noch nicht angefragt
    #[default]
    Unknown,
    /// Anfrage läuft
    Pending,
    /// Standort bekannt: "Du bist hier"-Marker wird gezeichnet
    Known(GeoCoordinate),
    /// Abgelehnt oder fehlgeschlagen: kein Marker
    Unavailable,
}

impl CurrentLocation {
    /// Koordinate, falls bekannt
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        match self {
            CurrentLocation::Known(c) => Some(*c),
            _ => None,
        }
    }
}

/// Gesamter Zustand einer gemounteten Kartenansicht.
///
/// Wird beim Remount komplett ersetzt; nichts davon wird persistiert.
#[derive(Debug)]
pub struct MapViewState {
    /// Mount-ID dieser Lebensdauer
    pub mount_id: MountId,
    /// Handle auf die Kartenoberfläche (None bis die Oberfläche bereit ist)
    pub viewport: Option<ViewportHandle>,
    /// Gesetzte Mülleimer in Erstellungsreihenfolge
    pub markers: MarkerList,
    /// Selektion (Detail-Popup)
    pub selection: SelectionState,
    /// Ob Karten-Klicks Marker setzen
    pub placement_mode: bool,
    /// Ob der Onboarding-Hinweis gerade angezeigt wird
    pub alert_visible: bool,
    /// Eigener Standort
    pub current_location: CurrentLocation,
}

impl MapViewState {
    /// Erstellt den Zustand einer frisch gemounteten Ansicht.
    pub fn new(mount_id: MountId) -> Self {
        Self {
            mount_id,
            viewport: None,
            markers: MarkerList::new(),
            selection: SelectionState::new(),
            placement_mode: false,
            alert_visible: false,
            current_location: CurrentLocation::Unknown,
        }
    }

    /// Gibt zurück, ob die Kartenoberfläche Befehle annimmt.
    pub fn is_surface_ready(&self) -> bool {
        self.viewport.is_some()
    }
}
