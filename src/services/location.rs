//! Ermittlung des eigenen Standorts.

use crate::core::GeoCoordinate;
use crate::shared::MapOptions;
use serde::Deserialize;
use thiserror::Error;

/// Fehler bei der Standortermittlung.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location unavailable: {0}")]
    Unavailable(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for LocationError {
    fn from(e: reqwest::Error) -> Self {
        LocationError::Http(e.to_string())
    }
}

/// Schnittstelle zum Standortdienst.
pub trait LocationProvider: Send + Sync {
    /// Ermittelt den aktuellen Standort (einmalig, blockierend).
    fn current_position(&self) -> Result<GeoCoordinate, LocationError>;
}

/// Standort über IP-Geolokalisierung.
pub struct IpLocationProvider {
    url: String,
    client: reqwest::blocking::Client,
}

impl IpLocationProvider {
    /// Erstellt den Provider aus den Optionen.
    pub fn new(options: &MapOptions) -> Result<Self, LocationError> {
        Ok(Self {
            url: options.geolocation_url.clone(),
            client: super::build_http_client(options)?,
        })
    }
}

impl LocationProvider for IpLocationProvider {
    fn current_position(&self) -> Result<GeoCoordinate, LocationError> {
        let response = self.client.get(&self.url).send()?;
        if !response.status().is_success() {
            return Err(LocationError::Http(format!("HTTP {}", response.status())));
        }
        let body = response.text()?;
        parse_location_response(&body)
    }
}

#[derive(Deserialize)]
struct IpLocation {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

/// Parst die JSON-Antwort des Geolokalisierungsdienstes.
pub fn parse_location_response(body: &str) -> Result<GeoCoordinate, LocationError> {
    let parsed: IpLocation =
        serde_json::from_str(body).map_err(|e| LocationError::InvalidResponse(e.to_string()))?;

    if parsed.error {
        let reason = parsed.reason.unwrap_or_else(|| "unknown".to_string());
        return Err(LocationError::Unavailable(reason));
    }

    match (parsed.latitude, parsed.longitude) {
        (Some(lat), Some(lon)) => Ok(GeoCoordinate::new(lat, lon)),
        _ => Err(LocationError::InvalidResponse(
            "latitude/longitude missing".to_string(),
        )),
    }
}
