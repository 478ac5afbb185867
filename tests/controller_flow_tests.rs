use trash_can_map::app::{CurrentLocation, MountId};
use trash_can_map::core::{SurfaceId, ViewportCommand};
use trash_can_map::{AppCommand, AppController, AppIntent, AppState, GeoCoordinate, RecenterSource};

/// State nach Mount, SDK-Laden und bereiter Oberfläche.
fn ready_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    for intent in [
        AppIntent::MapViewMounted,
        AppIntent::MapSdkLoaded,
        AppIntent::MapSurfaceReady {
            surface: SurfaceId(1),
            zoom: 12.0,
        },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Lebenszyklus-Intent sollte durchlaufen");
    }
    state
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn drain_viewport(state: &mut AppState) -> Vec<ViewportCommand> {
    state
        .map_view
        .viewport
        .as_mut()
        .expect("Oberfläche sollte bereit sein")
        .drain()
}

#[test]
fn test_clicks_in_placement_mode_append_markers_in_order() {
    let mut controller = AppController::new();
    let mut state = ready_state(&mut controller);

    send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
    send(&mut controller, &mut state, AppIntent::OnboardingAlertDismissed);

    let clicks = [
        GeoCoordinate::new(43.6600, -79.3800),
        GeoCoordinate::new(43.7000, -79.4000),
    ];
    for coordinate in clicks {
        send(
            &mut controller,
            &mut state,
            AppIntent::MapClicked { coordinate },
        );
    }

    let placed: Vec<_> = state
        .map_view
        .markers
        .iter()
        .map(|m| m.position())
        .collect();
    assert_eq!(placed, clicks.to_vec());
    assert_eq!(state.marker_count(), 2);
}

#[test]
fn test_clicks_without_placement_mode_do_not_add_markers() {
    let mut controller = AppController::new();
    let mut state = ready_state(&mut controller);

    send(
        &mut controller,
        &mut state,
        AppIntent::MapClicked {
            coordinate: GeoCoordinate::new(43.66, -79.38),
        },
    );

    assert_eq!(state.marker_count(), 0);
    assert!(!state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, AppCommand::PlaceMarker { .. })));
}

#[test]
fn test_onboarding_alert_is_shown_only_twice_per_process() {
    let mut controller = AppController::new();
    let mut state = ready_state(&mut controller);
    let mut shown = 0;

    // an, aus, an, aus, an
    for round in 0..5 {
        send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
        if round % 2 == 0 {
            if state.map_view.alert_visible {
                shown += 1;
            }
            send(&mut controller, &mut state, AppIntent::OnboardingAlertDismissed);
        }
    }

    assert_eq!(shown, 2);
    assert!(state.map_view.placement_mode);
    assert!(!state.map_view.alert_visible);
    assert_eq!(state.onboarding.shown_count(), 2);
}

#[test]
fn test_select_then_dismiss_marker_detail() {
    let mut controller = AppController::new();
    let mut state = ready_state(&mut controller);
    send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
    send(
        &mut controller,
        &mut state,
        AppIntent::MapClicked {
            coordinate: GeoCoordinate::new(43.65, -79.38),
        },
    );
    let marker_id = state
        .map_view
        .markers
        .iter()
        .next()
        .map(|m| m.id())
        .expect("Marker sollte existieren");

    send(
        &mut controller,
        &mut state,
        AppIntent::MarkerActivated { marker_id },
    );
    assert_eq!(state.map_view.selection.selected_marker, Some(marker_id));

    send(&mut controller, &mut state, AppIntent::MarkerDetailDismissed);
    assert_eq!(state.map_view.selection.selected_marker, None);
}

#[test]
fn test_recenter_from_search_and_locate_issue_same_viewport_commands() {
    let mut controller = AppController::new();
    let mut state = ready_state(&mut controller);
    let target = GeoCoordinate::new(43.7, -79.4);
    let expected = vec![
        ViewportCommand::PanTo(target),
        ViewportCommand::SetZoom(16.0),
    ];

    send(
        &mut controller,
        &mut state,
        AppIntent::RecenterRequested {
            coordinate: target,
            source: RecenterSource::Search,
        },
    );
    assert_eq!(drain_viewport(&mut state), expected);

    send(
        &mut controller,
        &mut state,
        AppIntent::RecenterRequested {
            coordinate: target,
            source: RecenterSource::Locate,
        },
    );
    assert_eq!(drain_viewport(&mut state), expected);
}

#[test]
fn test_interactions_before_sdk_loaded_are_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
    send(
        &mut controller,
        &mut state,
        AppIntent::MapClicked {
            coordinate: GeoCoordinate::new(1.0, 1.0),
        },
    );

    assert!(!state.map_view.placement_mode);
    assert_eq!(state.marker_count(), 0);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_mount_requests_position_and_applies_result() {
    let mut controller = AppController::new();
    let mut state = ready_state(&mut controller);
    let mount_id = state.map_view.mount_id;
    assert_eq!(state.map_view.current_location, CurrentLocation::Pending);

    let here = GeoCoordinate::new(43.6532, -79.3832);
    send(
        &mut controller,
        &mut state,
        AppIntent::CurrentPositionResolved {
            mount_id,
            coordinate: here,
        },
    );

    assert_eq!(state.map_view.current_location.coordinate(), Some(here));
}

#[test]
fn test_location_failure_leaves_map_usable() {
    let mut controller = AppController::new();
    let mut state = ready_state(&mut controller);
    let mount_id = state.map_view.mount_id;

    send(
        &mut controller,
        &mut state,
        AppIntent::CurrentPositionUnavailable {
            mount_id,
            reason: "permission denied".into(),
        },
    );
    assert_eq!(state.map_view.current_location, CurrentLocation::Unavailable);

    send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
    send(
        &mut controller,
        &mut state,
        AppIntent::MapClicked {
            coordinate: GeoCoordinate::new(43.66, -79.38),
        },
    );
    assert_eq!(state.marker_count(), 1);
}

#[test]
fn test_reload_resets_view_keeps_onboarding_and_drops_stale_position() {
    let mut controller = AppController::new();
    let mut state = ready_state(&mut controller);
    let old_mount = state.map_view.mount_id;
    send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
    send(
        &mut controller,
        &mut state,
        AppIntent::MapClicked {
            coordinate: GeoCoordinate::new(43.66, -79.38),
        },
    );

    send(&mut controller, &mut state, AppIntent::MapViewReloadRequested);

    assert_ne!(state.map_view.mount_id, old_mount);
    assert_eq!(state.marker_count(), 0);
    assert!(!state.map_view.placement_mode);
    assert!(state.map_view.viewport.is_none());
    assert_eq!(state.onboarding.shown_count(), 1);
    assert_eq!(state.map_view.current_location, CurrentLocation::Pending);

    // Späte Antwort der alten Ansicht
    send(
        &mut controller,
        &mut state,
        AppIntent::CurrentPositionResolved {
            mount_id: old_mount,
            coordinate: GeoCoordinate::new(1.0, 1.0),
        },
    );
    assert_eq!(state.map_view.current_location, CurrentLocation::Pending);

    send(
        &mut controller,
        &mut state,
        AppIntent::CurrentPositionResolved {
            mount_id: MountId(999),
            coordinate: GeoCoordinate::new(2.0, 2.0),
        },
    );
    assert_eq!(state.map_view.current_location.coordinate(), None);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);
    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_toggle_sequence_without_dismissal_counts_each_enable() {
    let mut controller = AppController::new();
    let mut state = ready_state(&mut controller);
    let first = GeoCoordinate::new(43.66, -79.38);
    let second = GeoCoordinate::new(43.70, -79.40);

    // 1. Aktivierung: Hinweis, Zähler 1
    send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
    assert!(state.map_view.alert_visible);
    assert_eq!(state.onboarding.shown_count(), 1);
    send(
        &mut controller,
        &mut state,
        AppIntent::MapClicked { coordinate: first },
    );

    // Deaktivieren blendet den Hinweis aus
    send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
    assert!(!state.map_view.alert_visible);

    // 2. Aktivierung: Hinweis, Zähler 2
    send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
    assert!(state.map_view.alert_visible);
    assert_eq!(state.onboarding.shown_count(), 2);
    send(
        &mut controller,
        &mut state,
        AppIntent::MapClicked { coordinate: second },
    );

    let placed: Vec<_> = state
        .map_view
        .markers
        .iter()
        .map(|m| m.position())
        .collect();
    assert_eq!(placed, vec![first, second]);

    // 3. Aktivierung: kein Hinweis mehr
    send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
    send(&mut controller, &mut state, AppIntent::PlacementModeToggled);
    assert!(state.map_view.placement_mode);
    assert!(!state.map_view.alert_visible);
    assert_eq!(state.onboarding.shown_count(), 2);
}
