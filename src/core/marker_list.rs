//! Append-only Liste der gesetzten Marker.

use super::{GeoCoordinate, MarkerId, TrashCanMarker};
use chrono::{DateTime, Local};

/// Geordnete Marker-Sequenz.
///
/// Einfügereihenfolge = Erstellungsreihenfolge. Es gibt weder Löschen noch
/// Umsortieren; die Liste lebt so lange wie die MapView.
#[derive(Debug, Clone, Default)]
pub struct MarkerList {
    markers: Vec<TrashCanMarker>,
    next_id: u64,
}

impl MarkerList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            next_id: 1,
        }
    }

    /// Hängt einen neuen Marker an und gibt dessen ID zurück.
    pub fn push(&mut self, position: GeoCoordinate, placed_at: DateTime<Local>) -> MarkerId {
        // Default::default() startet bei 0, new() bei 1
        let id = MarkerId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.markers.push(TrashCanMarker::new(id, position, placed_at));
        id
    }

    /// Sucht einen Marker anhand seiner ID.
    pub fn get(&self, id: MarkerId) -> Option<&TrashCanMarker> {
        self.markers.iter().find(|m| m.id() == id)
    }

    /// Gibt zurück, ob ein Marker mit dieser ID existiert.
    pub fn contains(&self, id: MarkerId) -> bool {
        self.get(id).is_some()
    }

    /// Anzahl der Marker
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn noch kein Marker gesetzt wurde.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Iteriert in Erstellungsreihenfolge.
    pub fn iter(&self) -> std::slice::Iter<'_, TrashCanMarker> {
        self.markers.iter()
    }

    /// Read-only Sicht auf alle Marker.
    pub fn as_slice(&self) -> &[TrashCanMarker] {
        &self.markers
    }
}

impl<'a> IntoIterator for &'a MarkerList {
    type Item = &'a TrashCanMarker;
    type IntoIter = std::slice::Iter<'a, TrashCanMarker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
