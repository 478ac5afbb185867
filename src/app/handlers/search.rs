//! Handler für das Such-Widget.

use crate::app::use_cases;
use crate::app::AppState;
use crate::services::GeocodeHit;

/// Stößt eine Suche an.
pub fn submit(state: &mut AppState, query: String) {
    use_cases::search::submit(state, query);
}

/// Übernimmt Suchtreffer (nur für die neueste Anfrage).
pub fn apply_results(state: &mut AppState, request_id: u64, hits: Vec<GeocodeHit>) {
    use_cases::search::apply_results(state, request_id, hits);
}

/// Übernimmt einen Suchfehler (nur für die neueste Anfrage).
pub fn fail(state: &mut AppState, request_id: u64, reason: String) {
    use_cases::search::fail(state, request_id, reason);
}

/// Leert die Trefferliste.
pub fn clear_results(state: &mut AppState) {
    use_cases::search::clear_results(state);
}
