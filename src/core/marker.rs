//! Vom Benutzer gesetzter Mülleimer-Marker.

use super::GeoCoordinate;
use chrono::{DateTime, Local};
use std::fmt;

/// Eindeutige ID eines Markers innerhalb einer MapView-Lebensdauer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein Mülleimer auf der Karte.
///
/// Position und Zeitstempel werden beim Erstellen gesetzt und danach nicht
/// mehr verändert.
#[derive(Debug, Clone, PartialEq)]
pub struct TrashCanMarker {
    id: MarkerId,
    position: GeoCoordinate,
    placed_at: DateTime<Local>,
}

impl TrashCanMarker {
    /// Erstellt einen Marker. IDs vergibt ausschließlich die [`super::MarkerList`].
    pub(crate) fn new(id: MarkerId, position: GeoCoordinate, placed_at: DateTime<Local>) -> Self {
        Self {
            id,
            position,
            placed_at,
        }
    }

    /// ID des Markers
    pub fn id(&self) -> MarkerId {
        self.id
    }

    /// Position des Markers
    pub fn position(&self) -> GeoCoordinate {
        self.position
    }

    /// Zeitpunkt der Platzierung (lokale Zeit des Clients)
    pub fn placed_at(&self) -> DateTime<Local> {
        self.placed_at
    }
}
