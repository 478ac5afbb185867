//! Hintergrunddienste: Geocoding, Standortermittlung und Job-Runner.
//!
//! Die Dienste blockieren und laufen deshalb ausschließlich auf
//! Hintergrund-Threads des [`JobRunner`]. Ergebnisse gelangen als
//! `AppIntent` zurück in den Frame-Loop.

pub mod geocoding;
pub mod jobs;
pub mod location;

pub use geocoding::{GeocodeError, GeocodeHit, Geocoder, NominatimGeocoder};
pub use jobs::JobRunner;
pub use location::{IpLocationProvider, LocationError, LocationProvider};

use crate::shared::MapOptions;
use std::time::Duration;

/// Baut den gemeinsamen HTTP-Client für alle Dienste.
pub(crate) fn build_http_client(
    options: &MapOptions,
) -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(options.http_timeout_secs))
        .user_agent(options.user_agent.clone())
        .build()
}
