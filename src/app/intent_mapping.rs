//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Solange das Karten-SDK lädt, ergeben interaktive Intents keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    if intent.is_interactive() && !state.is_sdk_loaded() {
        log::debug!("Karten-SDK lädt noch, Intent verworfen: {:?}", intent);
        return Vec::new();
    }

    match intent {
        AppIntent::MapViewMounted => vec![AppCommand::RequestCurrentPosition],
        AppIntent::MapViewReloadRequested => vec![
            AppCommand::RemountMapView,
            AppCommand::RequestCurrentPosition,
        ],
        AppIntent::MapSdkLoaded => vec![AppCommand::MarkSdkLoaded],
        AppIntent::MapSurfaceReady { surface, zoom } => {
            vec![AppCommand::AttachSurface { surface, zoom }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::MapClicked { coordinate } => {
            if !state.map_view.placement_mode {
                return Vec::new();
            }
            vec![AppCommand::PlaceMarker {
                coordinate,
                placed_at: chrono::Local::now(),
            }]
        }
        AppIntent::MarkerActivated { marker_id } => {
            vec![AppCommand::SelectMarker { marker_id }]
        }
        AppIntent::MarkerDetailDismissed => vec![AppCommand::ClearSelection],
        AppIntent::PlacementModeToggled => {
            // Nur der Übergang aus → an löst den Hinweis aus; an → aus blendet ihn aus
            if state.map_view.placement_mode {
                vec![
                    AppCommand::TogglePlacementMode,
                    AppCommand::DismissOnboardingAlert,
                ]
            } else {
                vec![
                    AppCommand::TogglePlacementMode,
                    AppCommand::ShowOnboardingAlert,
                ]
            }
        }
        AppIntent::OnboardingAlertDismissed => vec![AppCommand::DismissOnboardingAlert],
        AppIntent::RecenterRequested { coordinate, source } => {
            log::debug!("Recenter auf {} angefordert ({:?})", coordinate, source);
            vec![AppCommand::RecenterOn { coordinate }]
        }
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomBy {
            delta: state.options.zoom_step,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomBy {
            delta: -state.options.zoom_step,
        }],
        AppIntent::MapZoomChanged { zoom } => vec![AppCommand::SyncZoom { zoom }],
        AppIntent::SearchSubmitted { query } => {
            if query.trim().is_empty() {
                return Vec::new();
            }
            vec![AppCommand::SubmitSearch {
                query: query.trim().to_string(),
            }]
        }
        AppIntent::SearchResultChosen { hit } => vec![
            AppCommand::ClearSearchResults,
            AppCommand::RecenterOn {
                coordinate: hit.position,
            },
        ],
        AppIntent::SearchResultsDismissed => vec![AppCommand::ClearSearchResults],
        AppIntent::LocateRequested => vec![AppCommand::RequestLocate],

        AppIntent::CurrentPositionResolved {
            mount_id,
            coordinate,
        } => {
            if mount_id != state.map_view.mount_id {
                log::debug!(
                    "Standort für veraltete Ansicht {:?} verworfen (aktuell {:?})",
                    mount_id,
                    state.map_view.mount_id
                );
                return Vec::new();
            }
            vec![AppCommand::ApplyCurrentPosition { coordinate }]
        }
        AppIntent::CurrentPositionUnavailable { mount_id, reason } => {
            if mount_id != state.map_view.mount_id {
                return Vec::new();
            }
            log::warn!("Standort nicht verfügbar: {}", reason);
            vec![AppCommand::MarkCurrentPositionUnavailable]
        }
        AppIntent::LocateResolved { coordinate } => vec![
            AppCommand::FinishLocate { error: None },
            AppCommand::RecenterOn { coordinate },
        ],
        AppIntent::LocateFailed { reason } => {
            vec![AppCommand::FinishLocate {
                error: Some(reason),
            }]
        }
        AppIntent::SearchResultsReceived { request_id, hits } => {
            vec![AppCommand::ApplySearchResults { request_id, hits }]
        }
        AppIntent::SearchFailed { request_id, reason } => {
            vec![AppCommand::FailSearch { request_id, reason }]
        }
    }
}

#[cfg(test)]
mod tests;
