//! Application State — zentrale Datenhaltung.
//!
//! `AppState` bündelt den remountbaren Zustand der Kartenansicht
//! (`MapViewState`), die prozessweite Onboarding-Sitzung, den Zustand der
//! Kind-Widgets und die ausstehenden Dienst-Anfragen.

mod app_state;
mod map_view;
mod onboarding;
mod requests;
mod selection;
mod widgets;

pub use app_state::{AppState, MapSdkStatus};
pub use map_view::{CurrentLocation, MapViewState, MountId};
pub use onboarding::OnboardingSession;
pub use requests::{LocationPurpose, PendingRequests, SearchRequest};
pub use selection::SelectionState;
pub use widgets::{LocateWidgetState, SearchWidgetState, UiState};
