//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Lebenszyklus ===
            AppCommand::MarkSdkLoaded => handlers::lifecycle::mark_sdk_loaded(state),
            AppCommand::AttachSurface { surface, zoom } => {
                handlers::lifecycle::attach_surface(state, surface, zoom)
            }
            AppCommand::RemountMapView => handlers::lifecycle::remount(state),
            AppCommand::RequestExit => handlers::lifecycle::request_exit(state),

            // === Marker & Selektion ===
            AppCommand::PlaceMarker {
                coordinate,
                placed_at,
            } => handlers::markers::place(state, coordinate, placed_at),
            AppCommand::SelectMarker { marker_id } => handlers::markers::select(state, marker_id),
            AppCommand::ClearSelection => handlers::markers::clear_selection(state),

            // === Platzierungsmodus & Onboarding ===
            AppCommand::TogglePlacementMode => handlers::markers::toggle_placement_mode(state),
            AppCommand::ShowOnboardingAlert => handlers::dialog::show_onboarding_alert(state),
            AppCommand::DismissOnboardingAlert => {
                handlers::dialog::dismiss_onboarding_alert(state)
            }

            // === Viewport ===
            AppCommand::RecenterOn { coordinate } => handlers::view::recenter_on(state, coordinate),
            AppCommand::ZoomBy { delta } => handlers::view::zoom_by(state, delta),
            AppCommand::SyncZoom { zoom } => handlers::view::sync_zoom(state, zoom),

            // === Standort ===
            AppCommand::RequestCurrentPosition => {
                handlers::location::request_current_position(state)
            }
            AppCommand::ApplyCurrentPosition { coordinate } => {
                handlers::location::apply_current_position(state, coordinate)
            }
            AppCommand::MarkCurrentPositionUnavailable => {
                handlers::location::mark_unavailable(state)
            }
            AppCommand::RequestLocate => handlers::location::request_locate(state),
            AppCommand::FinishLocate { error } => handlers::location::finish_locate(state, error),

            // === Suche ===
            AppCommand::SubmitSearch { query } => handlers::search::submit(state, query),
            AppCommand::ApplySearchResults { request_id, hits } => {
                handlers::search::apply_results(state, request_id, hits)
            }
            AppCommand::FailSearch { request_id, reason } => {
                handlers::search::fail(state, request_id, reason)
            }
            AppCommand::ClearSearchResults => handlers::search::clear_results(state),
        }

        Ok(())
    }
}
