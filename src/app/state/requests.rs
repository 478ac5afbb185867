use super::MountId;

/// Wofür eine Standortabfrage gestellt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationPurpose {
    /// Einmalige Abfrage beim Mount der Kartenansicht
    Mount(MountId),
    /// Abfrage durch den Locate-Button
    Locate,
}

/// Geocoding-Anfrage des Such-Widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Laufende Nummer; nur die neueste Antwort wird übernommen
    pub id: u64,
    /// Suchtext
    pub query: String,
}

/// Ausstehende Anfragen an Hintergrunddienste.
///
/// Use-Cases setzen hier nur Flags; der Job-Runner im Host holt sie pro
/// Frame ab und startet die eigentlichen Anfragen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingRequests {
    /// Angeforderte Standortabfragen (Mount und/oder Locate)
    pub location: Vec<LocationPurpose>,
    /// Angeforderte Suche
    pub search: Option<SearchRequest>,
}

impl PendingRequests {
    /// Gibt `true` zurück, wenn nichts aussteht.
    pub fn is_empty(&self) -> bool {
        self.location.is_empty() && self.search.is_none()
    }
}
