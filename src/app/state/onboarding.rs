/// Prozessweite Onboarding-Sitzung.
///
/// Zählt, wie oft der Platzierungs-Hinweis angezeigt wurde. Liegt außerhalb
/// von `MapViewState`, damit der Zähler einen Remount der Kartenansicht
/// übersteht.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingSession {
    shown_count: u32,
    cap: u32,
}

impl OnboardingSession {
    /// Erstellt eine Sitzung mit der angegebenen Obergrenze.
    pub fn new(cap: u32) -> Self {
        Self {
            shown_count: 0,
            cap,
        }
    }

    /// Bisherige Anzahl Anzeigen
    pub fn shown_count(&self) -> u32 {
        self.shown_count
    }

    /// Obergrenze der Anzeigen
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Gibt zurück, ob der Hinweis noch einmal erscheinen darf.
    pub fn can_show(&self) -> bool {
        self.shown_count < self.cap
    }

    /// Verbucht eine Anzeige. Gibt `false` zurück, wenn die Obergrenze erreicht ist.
    pub fn record_shown(&mut self) -> bool {
        if !self.can_show() {
            return false;
        }
        self.shown_count += 1;
        true
    }
}
