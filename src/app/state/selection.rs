use crate::core::MarkerId;

/// Auswahlbezogener Zustand der Kartenansicht
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Marker, dessen Detail-Popup offen ist
    pub selected_marker: Option<MarkerId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_marker: None,
        }
    }

    /// Gibt zurück, ob der Marker selektiert ist.
    pub fn is_selected(&self, id: MarkerId) -> bool {
        self.selected_marker == Some(id)
    }
}
