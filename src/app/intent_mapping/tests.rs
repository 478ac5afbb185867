use crate::app::state::{MapSdkStatus, MountId};
use crate::app::{AppCommand, AppIntent, AppState, RecenterSource};
use crate::core::GeoCoordinate;
use crate::services::GeocodeHit;

use super::map_intent_to_commands;

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    state.sdk_status = MapSdkStatus::Loaded;
    state
}

#[test]
fn interactive_intents_are_dropped_while_sdk_loads() {
    let state = AppState::new();

    let intents = [
        AppIntent::PlacementModeToggled,
        AppIntent::MapClicked {
            coordinate: GeoCoordinate::new(1.0, 2.0),
        },
        AppIntent::ZoomInRequested,
        AppIntent::LocateRequested,
    ];

    for intent in intents {
        assert!(map_intent_to_commands(&state, intent).is_empty());
    }
}

#[test]
fn lifecycle_intents_pass_while_sdk_loads() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::MapSdkLoaded);
    assert_eq!(commands, vec![AppCommand::MarkSdkLoaded]);

    let commands = map_intent_to_commands(&state, AppIntent::MapViewMounted);
    assert_eq!(commands, vec![AppCommand::RequestCurrentPosition]);
}

#[test]
fn map_click_without_placement_mode_maps_to_nothing() {
    let state = loaded_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            coordinate: GeoCoordinate::new(43.66, -79.38),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn map_click_in_placement_mode_maps_to_place_marker() {
    let mut state = loaded_state();
    state.map_view.placement_mode = true;
    let coordinate = GeoCoordinate::new(43.66, -79.38);

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { coordinate });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::PlaceMarker { coordinate: c, .. } if c == coordinate
    ));
}

#[test]
fn toggle_on_shows_onboarding_toggle_off_hides_it() {
    let mut state = loaded_state();

    let on = map_intent_to_commands(&state, AppIntent::PlacementModeToggled);
    assert_eq!(
        on,
        vec![
            AppCommand::TogglePlacementMode,
            AppCommand::ShowOnboardingAlert
        ]
    );

    state.map_view.placement_mode = true;
    let off = map_intent_to_commands(&state, AppIntent::PlacementModeToggled);
    assert_eq!(
        off,
        vec![
            AppCommand::TogglePlacementMode,
            AppCommand::DismissOnboardingAlert
        ]
    );
}

#[test]
fn recenter_from_search_and_locate_maps_identically() {
    let state = loaded_state();
    let coordinate = GeoCoordinate::new(43.7, -79.4);

    let from_search = map_intent_to_commands(
        &state,
        AppIntent::RecenterRequested {
            coordinate,
            source: RecenterSource::Search,
        },
    );
    let from_locate = map_intent_to_commands(
        &state,
        AppIntent::RecenterRequested {
            coordinate,
            source: RecenterSource::Locate,
        },
    );

    assert_eq!(from_search, from_locate);
    assert_eq!(from_search, vec![AppCommand::RecenterOn { coordinate }]);
}

#[test]
fn blank_search_query_maps_to_nothing() {
    let state = loaded_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SearchSubmitted {
            query: "   ".into(),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn chosen_search_result_clears_list_then_recenters() {
    let state = loaded_state();
    let hit = GeocodeHit {
        label: "CN Tower".into(),
        position: GeoCoordinate::new(43.6426, -79.3871),
    };

    let commands = map_intent_to_commands(&state, AppIntent::SearchResultChosen { hit });

    assert_eq!(
        commands,
        vec![
            AppCommand::ClearSearchResults,
            AppCommand::RecenterOn {
                coordinate: GeoCoordinate::new(43.6426, -79.3871)
            }
        ]
    );
}

#[test]
fn stale_position_result_is_ignored() {
    let state = loaded_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CurrentPositionResolved {
            mount_id: MountId(99),
            coordinate: GeoCoordinate::new(1.0, 1.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn zoom_buttons_use_configured_step() {
    let mut state = loaded_state();
    state.options.zoom_step = 2.0;

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::ZoomInRequested),
        vec![AppCommand::ZoomBy { delta: 2.0 }]
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::ZoomOutRequested),
        vec![AppCommand::ZoomBy { delta: -2.0 }]
    );
}
