//! Use-Cases des Such-Widgets.

use crate::app::state::SearchRequest;
use crate::app::AppState;
use crate::services::GeocodeHit;

/// Vergibt eine neue Anfrage-ID und stellt die Suche in die Warteschlange.
///
/// Eine noch laufende ältere Anfrage wird dadurch überholt; ihre Antwort
/// wird später verworfen.
pub fn submit(state: &mut AppState, query: String) {
    let search = &mut state.ui.search;
    search.last_request_id += 1;
    let id = search.last_request_id;
    search.in_flight = Some(id);
    search.error = None;
    search.results.clear();
    log::info!("Suche #{} nach '{}'", id, query);
    state.requests.search = Some(SearchRequest { id, query });
}

/// Übernimmt Treffer, sofern sie zur neuesten Anfrage gehören.
pub fn apply_results(state: &mut AppState, request_id: u64, hits: Vec<GeocodeHit>) {
    let search = &mut state.ui.search;
    if search.in_flight != Some(request_id) {
        log::debug!("Veraltete Suchantwort #{} verworfen", request_id);
        return;
    }
    search.in_flight = None;
    if hits.is_empty() {
        search.error = Some("No results".to_string());
    }
    search.results = hits;
}

/// Übernimmt einen Suchfehler, sofern er zur neuesten Anfrage gehört.
pub fn fail(state: &mut AppState, request_id: u64, reason: String) {
    let search = &mut state.ui.search;
    if search.in_flight != Some(request_id) {
        return;
    }
    log::warn!("Suche #{} fehlgeschlagen: {}", request_id, reason);
    search.in_flight = None;
    search.results.clear();
    search.error = Some(reason);
}

/// Leert die Trefferliste und eine eventuelle Fehlermeldung.
pub fn clear_results(state: &mut AppState) {
    state.ui.search.results.clear();
    state.ui.search.error = None;
}
