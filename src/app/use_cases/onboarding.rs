//! Use-Cases für den Onboarding-Hinweis beim Aktivieren des Platzierungsmodus.
//!
//! Zustände: `Hidden` → `Shown` (Modus eingeschaltet und Zähler unter der
//! Obergrenze, Zähler +1), `Shown` → `Hidden` (Schließen). Ist die
//! Obergrenze erreicht, bleibt der Hinweis für den Rest des Prozesses aus.

use crate::app::AppState;

/// Text des Hinweises.
pub const ONBOARDING_MESSAGE: &str = "Now, you could click anywhere on the map and place a \
trash can for reference. If you wish to disable this, click the 'Stop' button to get \
double click zoom back.";

/// Zeigt den Hinweis, sofern die Obergrenze noch nicht erreicht ist.
pub fn show_alert(state: &mut AppState) {
    if state.map_view.alert_visible {
        return;
    }
    if !state.onboarding.record_shown() {
        log::debug!(
            "Onboarding-Hinweis unterdrückt ({} von {} Anzeigen)",
            state.onboarding.shown_count(),
            state.onboarding.cap()
        );
        return;
    }
    state.map_view.alert_visible = true;
    log::info!(
        "Onboarding-Hinweis angezeigt ({}/{})",
        state.onboarding.shown_count(),
        state.onboarding.cap()
    );
}

/// Schließt den Hinweis.
pub fn dismiss_alert(state: &mut AppState) {
    state.map_view.alert_visible = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_is_shown_at_most_cap_times() {
        let mut state = AppState::new();
        let mut shown = 0;

        for _ in 0..5 {
            show_alert(&mut state);
            if state.map_view.alert_visible {
                shown += 1;
            }
            dismiss_alert(&mut state);
        }

        assert_eq!(shown, 2);
        assert_eq!(state.onboarding.shown_count(), 2);
    }

    #[test]
    fn showing_while_visible_does_not_count_twice() {
        let mut state = AppState::new();
        show_alert(&mut state);
        show_alert(&mut state);
        assert_eq!(state.onboarding.shown_count(), 1);
    }
}
