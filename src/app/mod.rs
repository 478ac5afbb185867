//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Kartenansicht, der Onboarding-Sitzung
/// und der Kind-Widgets.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, RecenterSource};
pub use state::{
    AppState, CurrentLocation, LocationPurpose, MapSdkStatus, MapViewState, MountId,
    OnboardingSession, PendingRequests, SearchRequest, SelectionState, UiState,
};
pub use use_cases::onboarding::ONBOARDING_MESSAGE;
