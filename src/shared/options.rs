//! Zentrale Konfiguration der Karten-Anwendung.
//!
//! `MapOptions` enthält alle beim Start geladenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::GeoCoordinate;
use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// Startmitte der Karte (Toronto).
pub const DEFAULT_CENTER: GeoCoordinate = GeoCoordinate::new(43.6532, -79.3832);
/// Start-Zoomstufe.
pub const DEFAULT_ZOOM: f64 = 12.0;
/// Feste Nah-Zoomstufe nach Suche/Standortbestimmung.
pub const RECENTER_ZOOM: f64 = 16.0;
/// Zoom-Schritt der +/- Buttons.
pub const ZOOM_STEP: f64 = 1.0;

// ── Marker ──────────────────────────────────────────────────────────

/// Kantenlänge des Marker-Icons in Pixeln.
pub const MARKER_ICON_SIZE_PX: f32 = 30.0;
/// Klick-Radius um einen Marker in Pixeln.
pub const MARKER_HIT_RADIUS_PX: f32 = 15.0;
/// Füllfarbe der Mülleimer-Marker (RGBA: Grün).
pub const MARKER_COLOR: [f32; 4] = [0.13, 0.55, 0.13, 1.0];
/// Farbe des selektierten Markers (RGBA: Gelb).
pub const MARKER_COLOR_SELECTED: [f32; 4] = [1.0, 0.85, 0.0, 1.0];
/// Farbe des "Du bist hier"-Markers (RGBA: Blau).
pub const CURRENT_LOCATION_COLOR: [f32; 4] = [0.1, 0.45, 0.95, 1.0];

// ── Onboarding ──────────────────────────────────────────────────────

/// Wie oft der Platzierungs-Hinweis pro Prozess höchstens erscheint.
pub const ONBOARDING_CAP: u32 = 2;

// ── Dienste ─────────────────────────────────────────────────────────

/// Nominatim-kompatibler Geocoding-Endpunkt.
pub const GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
/// IP-basierter Standortdienst.
pub const GEOLOCATION_URL: &str = "https://ipapi.co/json/";
/// Maximale Anzahl Suchtreffer.
pub const SEARCH_RESULT_LIMIT: usize = 5;
/// Timeout für HTTP-Anfragen in Sekunden.
pub const HTTP_TIMEOUT_SECS: u64 = 10;
/// Umgebungsvariable, die den API-Key aus der Datei überschreibt.
pub const API_KEY_ENV: &str = "TRASH_CAN_MAP_API_KEY";

// ── Kartenstil ──────────────────────────────────────────────────────

/// Statische Stiltabelle für den Tile-Hintergrund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MapStyle {
    /// OpenStreetMap Standard
    #[default]
    Streets,
    /// Heller, reduzierter Stil
    Light,
    /// Dunkler Stil
    Dark,
    /// Eigene Tile-URL mit `{z}`, `{x}`, `{y}` und optional `{api_key}`
    Custom {
        url_template: String,
        attribution: String,
    },
}

impl MapStyle {
    /// URL-Template des Stils (noch ohne eingesetzten API-Key).
    pub fn url_template(&self) -> &str {
        match self {
            MapStyle::Streets => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            MapStyle::Light => "https://basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
            MapStyle::Dark => "https://basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png",
            MapStyle::Custom { url_template, .. } => url_template,
        }
    }

    /// Quellenangabe, die unten rechts auf der Karte erscheint.
    pub fn attribution(&self) -> &str {
        match self {
            MapStyle::Streets => "OpenStreetMap contributors",
            MapStyle::Light | MapStyle::Dark => "OpenStreetMap contributors, CARTO",
            MapStyle::Custom { attribution, .. } => attribution,
        }
    }

    /// Ob der Stil dunkle egui-Visuals nahelegt.
    pub fn prefers_dark_ui(&self) -> bool {
        matches!(self, MapStyle::Dark)
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start geladenen Optionen.
/// Wird als `trash_can_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapOptions {
    // ── Karte ───────────────────────────────────────────────────
    /// Tile-Stil
    #[serde(default)]
    pub style: MapStyle,
    /// API-Key des Kartendienstes (optional, wird per `{api_key}` eingesetzt)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Startmitte
    pub default_center: GeoCoordinate,
    /// Start-Zoomstufe
    pub default_zoom: f64,
    /// Zoomstufe nach Suche/Standortbestimmung
    pub recenter_zoom: f64,
    /// Zoom-Schritt der +/- Buttons
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,

    // ── Marker ──────────────────────────────────────────────────
    /// Kantenlänge des Marker-Icons in Pixeln
    pub marker_icon_size_px: f32,
    /// Klick-Radius um Marker in Pixeln
    pub marker_hit_radius_px: f32,
    /// Füllfarbe der Marker
    pub marker_color: [f32; 4],
    /// Farbe des selektierten Markers
    pub marker_color_selected: [f32; 4],
    /// Farbe des "Du bist hier"-Markers
    pub current_location_color: [f32; 4],

    // ── Onboarding ──────────────────────────────────────────────
    /// Maximale Anzahl Hinweis-Anzeigen pro Prozess
    #[serde(default = "default_onboarding_cap")]
    pub onboarding_cap: u32,

    // ── Dienste ─────────────────────────────────────────────────
    /// Basis-URL des Geocoders
    pub geocoder_url: String,
    /// URL des Standortdienstes
    pub geolocation_url: String,
    /// User-Agent für HTTP-Anfragen (Nominatim verlangt einen)
    pub user_agent: String,
    /// Maximale Anzahl Suchtreffer
    pub search_result_limit: usize,
    /// HTTP-Timeout in Sekunden
    pub http_timeout_secs: u64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            style: MapStyle::default(),
            api_key: None,
            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            recenter_zoom: RECENTER_ZOOM,
            zoom_step: ZOOM_STEP,

            marker_icon_size_px: MARKER_ICON_SIZE_PX,
            marker_hit_radius_px: MARKER_HIT_RADIUS_PX,
            marker_color: MARKER_COLOR,
            marker_color_selected: MARKER_COLOR_SELECTED,
            current_location_color: CURRENT_LOCATION_COLOR,

            onboarding_cap: ONBOARDING_CAP,

            geocoder_url: GEOCODER_URL.to_string(),
            geolocation_url: GEOLOCATION_URL.to_string(),
            user_agent: format!("trash-can-map/{}", env!("CARGO_PKG_VERSION")),
            search_result_limit: SEARCH_RESULT_LIMIT,
            http_timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

/// Serde-Default für `zoom_step` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_zoom_step() -> f64 {
    ZOOM_STEP
}

/// Serde-Default für `onboarding_cap`.
fn default_onboarding_cap() -> u32 {
    ONBOARDING_CAP
}

impl MapOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Schreibt die Optionen als TOML nach `path`.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        use anyhow::Context;

        let content = toml::to_string_pretty(self).context("MapOptions nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Schreiben nach {} fehlgeschlagen", path.display()))?;
        log::info!("Karten-Optionen geschrieben: {}", path.display());
        Ok(())
    }

    /// Lädt die Optionen; fehlt die Datei, wird sie mit Standardwerten angelegt.
    ///
    /// Ein Fehler beim Anlegen wird nur geloggt.
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            return Self::load_from_file(path);
        }
        let defaults = Self::default();
        if let Err(e) = defaults.save_to_file(path) {
            log::warn!("Standard-Optionen nicht angelegt: {:#}", e);
        }
        defaults
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("trash_can_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("trash_can_map.toml")
    }

    /// Übernimmt den API-Key aus der Umgebung, falls gesetzt.
    pub fn apply_env_overrides(&mut self) {
        self.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
    }

    fn apply_api_key_override(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            log::info!("API-Key aus {} übernommen", API_KEY_ENV);
            self.api_key = Some(key.trim().to_string());
        }
    }

    /// Tile-URL-Template mit eingesetztem API-Key.
    pub fn tile_url_template(&self) -> String {
        let template = self.style.url_template();
        match &self.api_key {
            Some(key) => template.replace("{api_key}", key),
            None => template.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let opts = MapOptions::default();
        assert_eq!(opts.default_center, DEFAULT_CENTER);
        assert_eq!(opts.recenter_zoom, 16.0);
        assert_eq!(opts.onboarding_cap, 2);
        assert_eq!(opts.style, MapStyle::Streets);
    }

    #[test]
    fn toml_roundtrip_keeps_custom_style() {
        let opts = MapOptions {
            style: MapStyle::Custom {
                url_template: "https://tiles.example/{z}/{x}/{y}.png?key={api_key}".into(),
                attribution: "Example".into(),
            },
            api_key: Some("abc".into()),
            ..MapOptions::default()
        };

        let path = std::env::temp_dir().join(format!(
            "trash_can_map_roundtrip_{}.toml",
            std::process::id()
        ));
        opts.save_to_file(&path).expect("Optionen speicherbar");
        let back = MapOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(back, opts);
        assert_eq!(
            back.tile_url_template(),
            "https://tiles.example/{z}/{x}/{y}.png?key=abc"
        );
    }

    #[test]
    fn load_from_broken_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "trash_can_map_broken_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "this is = = not toml").expect("Temp-Datei schreibbar");

        let opts = MapOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts, MapOptions::default());
    }

    #[test]
    fn load_or_create_writes_defaults_once() {
        let path = std::env::temp_dir().join(format!(
            "trash_can_map_created_{}.toml",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let created = MapOptions::load_or_create(&path);
        let written = path.exists();
        let reloaded = MapOptions::load_or_create(&path);
        let _ = std::fs::remove_file(&path);

        assert!(written);
        assert_eq!(created, MapOptions::default());
        assert_eq!(reloaded, created);
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("trash_can_map_does_not_exist.toml");
        assert_eq!(MapOptions::load_from_file(&path), MapOptions::default());
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let mut opts = MapOptions::default();
        opts.apply_api_key_override(Some("   ".into()));
        assert_eq!(opts.api_key, None);

        opts.apply_api_key_override(Some(" k3y ".into()));
        assert_eq!(opts.api_key.as_deref(), Some("k3y"));
    }
}
