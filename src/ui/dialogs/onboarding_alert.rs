use crate::app::{AppIntent, ONBOARDING_MESSAGE};

/// Zeigt den Onboarding-Hinweis als modales Overlay.
///
/// Schließen per Button, Klick auf den Hintergrund oder Escape.
pub fn show_onboarding_alert(ctx: &egui::Context, show: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !show {
        return events;
    }

    let modal = egui::Modal::new(egui::Id::new("onboarding_alert")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(ONBOARDING_MESSAGE);
            ui.add_space(10.0);

            if ui.button("Close").clicked() {
                events.push(AppIntent::OnboardingAlertDismissed);
            }
        });
    });

    if modal.should_close() && events.is_empty() {
        events.push(AppIntent::OnboardingAlertDismissed);
    }

    events
}
