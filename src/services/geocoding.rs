//! Geocoding für das Such-Widget (Nominatim-kompatible API).

use crate::core::GeoCoordinate;
use crate::shared::MapOptions;
use serde::Deserialize;
use thiserror::Error;

/// Ein Suchtreffer mit Anzeigename und Position.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    /// Anzeigename, z.B. "CN Tower, Toronto, Ontario, Canada"
    pub label: String,
    /// Position des Treffers
    pub position: GeoCoordinate,
}

/// Fehler beim Geocoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeocodeError {
    #[error("Search text is empty")]
    EmptyQuery,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        GeocodeError::Http(e.to_string())
    }
}

/// Schnittstelle zum Geocoding-Dienst.
pub trait Geocoder: Send + Sync {
    /// Sucht nach `query` und liefert höchstens `limit` Treffer.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<GeocodeHit>, GeocodeError>;
}

/// Geocoder gegen einen Nominatim-Endpunkt.
pub struct NominatimGeocoder {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl NominatimGeocoder {
    /// Erstellt den Geocoder aus den Optionen.
    pub fn new(options: &MapOptions) -> Result<Self, GeocodeError> {
        Ok(Self {
            base_url: options.geocoder_url.trim_end_matches('/').to_string(),
            api_key: options.api_key.clone(),
            client: super::build_http_client(options)?,
        })
    }
}

impl Geocoder for NominatimGeocoder {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<GeocodeHit>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        let url = format!("{}/search", self.base_url);
        let limit = limit.to_string();
        let mut params = vec![("q", query), ("format", "json"), ("limit", limit.as_str())];
        if let Some(key) = self.api_key.as_deref() {
            params.push(("key", key));
        }

        let response = self.client.get(&url).query(&params).send()?;
        if !response.status().is_success() {
            return Err(GeocodeError::Http(format!("HTTP {}", response.status())));
        }

        let body = response.text()?;
        parse_search_response(&body)
    }
}

#[derive(Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Parst die JSON-Antwort von `/search?format=json`.
///
/// Nominatim liefert Koordinaten als Strings.
pub fn parse_search_response(body: &str) -> Result<Vec<GeocodeHit>, GeocodeError> {
    let places: Vec<NominatimPlace> =
        serde_json::from_str(body).map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

    places
        .into_iter()
        .map(|place| {
            let lat: f64 = place.lat.parse().map_err(|_| {
                GeocodeError::InvalidResponse(format!("latitude '{}'", place.lat))
            })?;
            let lon: f64 = place.lon.parse().map_err(|_| {
                GeocodeError::InvalidResponse(format!("longitude '{}'", place.lon))
            })?;
            Ok(GeocodeHit {
                label: place.display_name,
                position: GeoCoordinate::new(lat, lon),
            })
        })
        .collect()
}
