//! Such-Widget: Freitext-Suche mit Trefferliste, schwebend über der Karte.

use crate::app::{AppIntent, UiState};

/// Rendert das Such-Widget und gibt erzeugte Events zurück.
///
/// Der Suchtext wird direkt im `UiState` bearbeitet; alles andere läuft über
/// Intents.
pub fn render_search_widget(
    ctx: &egui::Context,
    ui_state: &mut UiState,
    enabled: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let search = &mut ui_state.search;

    egui::Area::new(egui::Id::new("search_widget"))
        .anchor(egui::Align2::LEFT_TOP, [12.0, 72.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(320.0);
                ui.add_enabled_ui(enabled, |ui| {
                    ui.horizontal(|ui| {
                        let edit = ui.add(
                            egui::TextEdit::singleline(&mut search.query)
                                .hint_text("Search places…")
                                .desired_width(220.0),
                        );
                        let submitted =
                            edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                        if ui.button("Search").clicked() || submitted {
                            events.push(AppIntent::SearchSubmitted {
                                query: search.query.clone(),
                            });
                        }
                        if search.in_flight.is_some() {
                            ui.spinner();
                        }
                    });

                    if let Some(ref error) = search.error {
                        ui.colored_label(egui::Color32::LIGHT_RED, error);
                    }

                    if !search.results.is_empty() {
                        ui.separator();
                        for hit in &search.results {
                            if ui
                                .selectable_label(false, &hit.label)
                                .on_hover_text(hit.position.to_string())
                                .clicked()
                            {
                                events.push(AppIntent::SearchResultChosen { hit: hit.clone() });
                            }
                        }
                    }

                    let has_output = !search.results.is_empty() || search.error.is_some();
                    if has_output && ui.small_button("Clear").clicked() {
                        events.push(AppIntent::SearchResultsDismissed);
                    }
                });
            });
        });

    events
}
