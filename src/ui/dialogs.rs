//! Overlays über der Karte: Onboarding-Hinweis und Marker-Detail.

mod marker_info;
mod onboarding_alert;

pub use marker_info::show_marker_info;
pub use onboarding_alert::show_onboarding_alert;
