//! Geografische Koordinate (WGS84, Grad).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Koordinatenpaar in Grad (Breite, Länge).
///
/// Wird unverändert aus Karten-Klicks, Geocoding-Treffern und der
/// Standortabfrage übernommen. Eine Bereichsprüfung findet nicht statt,
/// das Karten-Widget liefert nur gültige Werte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lon: f64,
}

impl GeoCoordinate {
    /// Erstellt eine neue Koordinate.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_five_decimals() {
        let c = GeoCoordinate::new(43.6532, -79.3832);
        assert_eq!(c.to_string(), "(43.65320, -79.38320)");
    }

    #[test]
    fn deserializes_from_toml_table() {
        let c: GeoCoordinate = toml::from_str("lat = 1.5\nlon = -2.25").expect("gültiges TOML");
        assert_eq!(c, GeoCoordinate::new(1.5, -2.25));
    }
}
