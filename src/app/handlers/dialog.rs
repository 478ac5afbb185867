//! Handler für den Onboarding-Hinweis.

use crate::app::use_cases;
use crate::app::AppState;

/// Zeigt den Onboarding-Hinweis, sofern die Obergrenze nicht erreicht ist.
pub fn show_onboarding_alert(state: &mut AppState) {
    use_cases::onboarding::show_alert(state);
}

/// Schließt den Onboarding-Hinweis.
pub fn dismiss_onboarding_alert(state: &mut AppState) {
    use_cases::onboarding::dismiss_alert(state);
}
