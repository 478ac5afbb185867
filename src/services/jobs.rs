//! Führt ausstehende Dienst-Anfragen auf Hintergrund-Threads aus.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use super::{Geocoder, LocationProvider};
use crate::app::{AppIntent, AppState, LocationPurpose};

/// Wird nach jedem fertigen Job aufgerufen (z.B. `Context::request_repaint`).
pub type WakeFn = Arc<dyn Fn() + Send + Sync>;

/// Startet Geocoding- und Standort-Jobs und sammelt ihre Ergebnisse.
///
/// Jeder Job läuft auf einem eigenen Thread und sendet genau einen Intent
/// zurück. Der Frame-Loop ruft [`JobRunner::dispatch`] und
/// [`JobRunner::poll`] einmal pro Frame auf.
pub struct JobRunner {
    geocoder: Arc<dyn Geocoder>,
    location: Arc<dyn LocationProvider>,
    sender: Sender<AppIntent>,
    receiver: Receiver<AppIntent>,
    wake: Option<WakeFn>,
    search_limit: usize,
    running: usize,
}

impl JobRunner {
    /// Erstellt einen Runner mit den gegebenen Diensten.
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        location: Arc<dyn LocationProvider>,
        search_limit: usize,
    ) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            geocoder,
            location,
            sender,
            receiver,
            wake: None,
            search_limit,
            running: 0,
        }
    }

    /// Setzt den Weckruf für fertige Jobs.
    pub fn with_wake(mut self, wake: WakeFn) -> Self {
        self.wake = Some(wake);
        self
    }

    /// Anzahl gestarteter, noch nicht abgeholter Jobs
    pub fn running(&self) -> usize {
        self.running
    }

    /// Entnimmt alle ausstehenden Anfragen aus dem State und startet sie.
    pub fn dispatch(&mut self, state: &mut AppState) {
        if state.requests.is_empty() {
            return;
        }
        let requests = std::mem::take(&mut state.requests);

        for purpose in requests.location {
            self.spawn_location(purpose);
        }
        if let Some(search) = requests.search {
            let geocoder = Arc::clone(&self.geocoder);
            let limit = self.search_limit;
            self.spawn(move || match geocoder.search(&search.query, limit) {
                Ok(hits) => AppIntent::SearchResultsReceived {
                    request_id: search.id,
                    hits,
                },
                Err(e) => AppIntent::SearchFailed {
                    request_id: search.id,
                    reason: e.to_string(),
                },
            });
        }
    }

    /// Liefert alle inzwischen fertigen Ergebnisse, ohne zu blockieren.
    pub fn poll(&mut self) -> Vec<AppIntent> {
        let finished: Vec<AppIntent> = self.receiver.try_iter().collect();
        self.running = self.running.saturating_sub(finished.len());
        finished
    }

    fn spawn_location(&mut self, purpose: LocationPurpose) {
        let location = Arc::clone(&self.location);
        self.spawn(move || match (purpose, location.current_position()) {
            (LocationPurpose::Mount(mount_id), Ok(coordinate)) => {
                AppIntent::CurrentPositionResolved {
                    mount_id,
                    coordinate,
                }
            }
            (LocationPurpose::Mount(mount_id), Err(e)) => AppIntent::CurrentPositionUnavailable {
                mount_id,
                reason: e.to_string(),
            },
            (LocationPurpose::Locate, Ok(coordinate)) => AppIntent::LocateResolved { coordinate },
            (LocationPurpose::Locate, Err(e)) => AppIntent::LocateFailed {
                reason: e.to_string(),
            },
        });
    }

    fn spawn<F>(&mut self, job: F)
    where
        F: FnOnce() -> AppIntent + Send + 'static,
    {
        let sender = self.sender.clone();
        let wake = self.wake.clone();
        let spawned = std::thread::Builder::new()
            .name("map-service-job".into())
            .spawn(move || {
                let intent = job();
                // Empfänger weg heißt: Anwendung beendet sich gerade
                if sender.send(intent).is_ok() {
                    if let Some(wake) = wake {
                        wake();
                    }
                }
            });

        match spawned {
            Ok(_) => self.running += 1,
            Err(e) => log::error!("Hintergrund-Job konnte nicht gestartet werden: {}", e),
        }
    }
}
