//! Opakes Handle auf die Kartenoberfläche und die darüber absetzbaren Befehle.

/// Kennung einer initialisierten Kartenoberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Imperativer Befehl an die Kartenoberfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportCommand {
    /// Kartenmitte auf Koordinate setzen
    PanTo(super::GeoCoordinate),
    /// Zoom-Stufe setzen
    SetZoom(f64),
}

/// Handle auf die Kartenoberfläche.
///
/// Der Core liest die Oberfläche nie, er reiht nur Befehle ein. Das
/// Karten-Panel holt sie pro Frame mit [`ViewportHandle::drain`] ab und
/// wendet sie in Reihenfolge an.
#[derive(Debug)]
pub struct ViewportHandle {
    surface: SurfaceId,
    pending: Vec<ViewportCommand>,
    zoom: f64,
}

impl ViewportHandle {
    /// Kleinste erlaubte Zoom-Stufe (Tile-Level).
    pub const ZOOM_MIN: f64 = 2.0;
    /// Größte erlaubte Zoom-Stufe (Tile-Level).
    pub const ZOOM_MAX: f64 = 19.0;

    /// Erstellt ein Handle für eine frisch initialisierte Oberfläche.
    pub fn new(surface: SurfaceId, zoom: f64) -> Self {
        Self {
            surface,
            pending: Vec::new(),
            zoom,
        }
    }

    /// ID der Oberfläche, zu der dieses Handle gehört
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Zuletzt bekannte Zoom-Stufe der Oberfläche
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Aktualisiert die Zoom-Stufe nach Gesten des Benutzers (Mausrad, Pinch).
    pub fn sync_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    /// Reiht einen Pan-Befehl ein.
    pub fn pan_to(&mut self, target: super::GeoCoordinate) {
        self.pending.push(ViewportCommand::PanTo(target));
    }

    /// Reiht einen Zoom-Befehl ein. Der Wert wird auf den gültigen Bereich begrenzt.
    pub fn set_zoom(&mut self, zoom: f64) {
        let zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        self.zoom = zoom;
        self.pending.push(ViewportCommand::SetZoom(zoom));
    }

    /// Ändert den Zoom relativ zur aktuellen Stufe.
    pub fn zoom_by(&mut self, delta: f64) {
        self.set_zoom(self.zoom + delta);
    }

    /// Noch nicht angewendete Befehle (read-only)
    pub fn pending(&self) -> &[ViewportCommand] {
        &self.pending
    }

    /// Entnimmt alle eingereihten Befehle in Reihenfolge.
    pub fn drain(&mut self) -> Vec<ViewportCommand> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoCoordinate;
    use approx::assert_relative_eq;

    #[test]
    fn commands_are_drained_in_issue_order() {
        let mut handle = ViewportHandle::new(SurfaceId(1), 12.0);
        let target = GeoCoordinate::new(43.66, -79.38);

        handle.pan_to(target);
        handle.set_zoom(16.0);

        assert_eq!(
            handle.drain(),
            vec![ViewportCommand::PanTo(target), ViewportCommand::SetZoom(16.0)]
        );
        assert!(handle.pending().is_empty());
    }

    #[test]
    fn set_zoom_is_clamped() {
        let mut handle = ViewportHandle::new(SurfaceId(1), 12.0);

        handle.set_zoom(42.0);
        assert_relative_eq!(handle.zoom(), ViewportHandle::ZOOM_MAX);

        handle.zoom_by(-100.0);
        assert_relative_eq!(handle.zoom(), ViewportHandle::ZOOM_MIN);
    }

    #[test]
    fn sync_zoom_does_not_queue_commands() {
        let mut handle = ViewportHandle::new(SurfaceId(7), 12.0);
        handle.sync_zoom(14.5);
        assert_relative_eq!(handle.zoom(), 14.5);
        assert!(handle.pending().is_empty());
    }
}
