//! Kartenansicht auf Basis von `walkers`.
//!
//! Das Panel besitzt Tiles und `MapMemory`, wendet eingereihte
//! Viewport-Befehle an und übersetzt Klicks und Zoom-Gesten in Intents.
//! Marker werden von einem Plugin gezeichnet, das auch die Trefferprüfung
//! übernimmt.

use std::sync::{Arc, Mutex};

use walkers::sources::{Attribution, TileSource};
use walkers::{HttpTiles, Map, MapMemory, Plugin, Position, Projector};

use super::color32;
use crate::app::{AppIntent, AppState, MountId};
use crate::core::{GeoCoordinate, MarkerId, SurfaceId, ViewportCommand};
use crate::shared::MapOptions;

const LOADING_SPINNER_COLOR: egui::Color32 = egui::Color32::from_rgb(0x12, 0x3a, 0xbc);
const ZOOM_EPSILON: f64 = 1e-6;

// ── Tile-Quelle ─────────────────────────────────────────────────

/// Tile-Quelle aus URL-Template und Attribution des gewählten Stils.
struct StyleTileSource {
    url_template: String,
    attribution: &'static str,
}

impl StyleTileSource {
    fn from_options(options: &MapOptions) -> Self {
        // Attribution verlangt 'static; die Quelle wird einmal pro Prozess erzeugt
        let attribution: &'static str =
            Box::leak(options.style.attribution().to_string().into_boxed_str());
        Self {
            url_template: options.tile_url_template(),
            attribution,
        }
    }
}

impl TileSource for StyleTileSource {
    fn tile_url(&self, tile_id: walkers::TileId) -> String {
        self.url_template
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.attribution,
            url: "",
            logo_light: None,
            logo_dark: None,
        }
    }
}

fn to_position(coordinate: GeoCoordinate) -> Position {
    walkers::lat_lon(coordinate.lat, coordinate.lon)
}

fn from_position(position: Position) -> GeoCoordinate {
    GeoCoordinate::new(position.y(), position.x())
}

// ── Marker-Plugin ───────────────────────────────────────────────

/// Klick auf die Karte, vom Plugin ermittelt.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MapClick {
    Marker(MarkerId),
    Map(GeoCoordinate),
}

/// Ergebnis eines Plugin-Laufs.
#[derive(Debug, Default)]
struct LayerOutput {
    click: Option<MapClick>,
    /// Oberkante des selektierten Markers (Anker für das Detail-Popup)
    selected_anchor: Option<egui::Pos2>,
}

/// Zeichnet Mülleimer und eigenen Standort, prüft Klicks gegen die Marker.
struct MarkerLayer {
    markers: Vec<(MarkerId, Position, bool)>,
    current_location: Option<Position>,
    icon_size: f32,
    hit_radius: f32,
    color: egui::Color32,
    color_selected: egui::Color32,
    location_color: egui::Color32,
    output: Arc<Mutex<LayerOutput>>,
}

impl MarkerLayer {
    fn from_state(state: &AppState, output: Arc<Mutex<LayerOutput>>) -> Self {
        let view = &state.map_view;
        let options = &state.options;
        Self {
            markers: view
                .markers
                .iter()
                .map(|m| {
                    (
                        m.id(),
                        to_position(m.position()),
                        view.selection.is_selected(m.id()),
                    )
                })
                .collect(),
            current_location: view.current_location.coordinate().map(to_position),
            icon_size: options.marker_icon_size_px,
            hit_radius: options.marker_hit_radius_px,
            color: color32(options.marker_color),
            color_selected: color32(options.marker_color_selected),
            location_color: color32(options.current_location_color),
            output,
        }
    }

    fn draw_current_location(&self, painter: &egui::Painter, center: egui::Pos2) {
        painter.circle_filled(center, 12.0, self.location_color.gamma_multiply(0.25));
        painter.circle_filled(center, 6.0, self.location_color);
        painter.circle_stroke(center, 6.0, egui::Stroke::new(2.0, egui::Color32::WHITE));
    }
}

impl Plugin for MarkerLayer {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let map_rect = response.rect;
        let painter = ui.painter().with_clip_rect(map_rect);

        if let Some(position) = self.current_location {
            let center = projector.project(position).to_pos2();
            self.draw_current_location(&painter, center);
        }

        let click_pos = if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };

        let icon = egui::Vec2::splat(self.icon_size);
        let visible = map_rect.expand(self.icon_size);
        let mut hit: Option<(MarkerId, f32)> = None;
        let mut selected_anchor = None;

        for &(id, position, selected) in &self.markers {
            let center = projector.project(position).to_pos2();
            if !visible.contains(center) {
                continue;
            }

            let tint = if selected {
                self.color_selected
            } else {
                self.color
            };
            egui::Image::new(egui::include_image!("../../assets/trash_can.svg"))
                .tint(tint)
                .paint_at(ui, egui::Rect::from_center_size(center, icon));

            if selected {
                selected_anchor = Some(center - egui::vec2(0.0, self.icon_size / 2.0));
            }

            // Nächster Marker im Trefferradius gewinnt
            if let Some(pointer) = click_pos {
                let distance = center.distance(pointer);
                if distance <= self.hit_radius && hit.is_none_or(|(_, best)| distance < best) {
                    hit = Some((id, distance));
                }
            }
        }

        let click = match (hit, click_pos) {
            (Some((id, _)), _) => Some(MapClick::Marker(id)),
            (None, Some(pointer)) => Some(MapClick::Map(from_position(
                projector.unproject(pointer.to_vec2()),
            ))),
            (None, None) => None,
        };

        match self.output.lock() {
            Ok(mut out) => {
                out.click = click;
                out.selected_anchor = selected_anchor;
            }
            Err(_) => log::error!("Marker-Layer: Ausgabe-Lock vergiftet"),
        }
    }
}

// ── Panel ───────────────────────────────────────────────────────

/// Kartenoberfläche: lebt für die gesamte Prozessdauer.
///
/// Ein Remount der Kartenansicht (neue `MountId`) setzt Kartenausschnitt
/// und Zoom zurück und meldet eine neue Oberfläche.
pub struct MapPanel {
    tiles: Option<HttpTiles>,
    memory: MapMemory,
    mounted: Option<MountId>,
    surface_seq: u64,
    surface_announced: bool,
    reported_zoom: f64,
}

impl Default for MapPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl MapPanel {
    /// Erstellt das Panel. Tiles werden erst im ersten Frame angelegt.
    pub fn new() -> Self {
        Self {
            tiles: None,
            memory: MapMemory::default(),
            mounted: None,
            surface_seq: 0,
            surface_announced: false,
            reported_zoom: 0.0,
        }
    }

    /// Rendert die Karte in den verfügbaren Bereich und gibt erzeugte Events zurück.
    ///
    /// `commands` sind die seit dem letzten Frame eingereihten Viewport-Befehle.
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        commands: Vec<ViewportCommand>,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if self.tiles.is_none() {
            let source = StyleTileSource::from_options(&state.options);
            self.tiles = Some(HttpTiles::new(source, ui.ctx().clone()));
            log::info!(
                "Tile-Quelle initialisiert: {}",
                state.options.style.attribution()
            );
            events.push(AppIntent::MapSdkLoaded);
        }

        if !state.is_sdk_loaded() {
            ui.centered_and_justified(|ui| {
                ui.add(
                    egui::Spinner::new()
                        .size(48.0)
                        .color(LOADING_SPINNER_COLOR),
                );
            });
            return events;
        }

        if self.mounted != Some(state.map_view.mount_id) {
            self.mount(state.map_view.mount_id, &state.options);
        }

        self.apply_commands(commands);

        let output = Arc::new(Mutex::new(LayerOutput::default()));
        let layer = MarkerLayer::from_state(state, Arc::clone(&output));
        let placing = state.map_view.placement_mode;
        let map_rect = ui.available_rect_before_wrap();

        let Some(tiles) = self.tiles.as_mut() else {
            return events;
        };
        let map = Map::new(
            Some(tiles),
            &mut self.memory,
            to_position(state.options.default_center),
        )
        .with_plugin(layer)
        .double_click_to_zoom(!placing);
        let response = ui.add(map);

        if placing && response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        }

        let (click, selected_anchor) = match output.lock() {
            Ok(mut out) => (out.click.take(), out.selected_anchor.take()),
            Err(_) => (None, None),
        };

        match click {
            Some(MapClick::Marker(marker_id)) => {
                events.push(AppIntent::MarkerActivated { marker_id })
            }
            Some(MapClick::Map(coordinate)) => events.push(AppIntent::MapClicked { coordinate }),
            None => {}
        }

        events.extend(self.report_zoom());

        if let (Some(marker_id), Some(anchor)) =
            (state.map_view.selection.selected_marker, selected_anchor)
        {
            if let Some(marker) = state.map_view.markers.get(marker_id) {
                events.extend(super::show_marker_info(ui.ctx(), marker, anchor));
            }
        }

        ui.painter().text(
            map_rect.max - egui::vec2(5.0, 5.0),
            egui::Align2::RIGHT_BOTTOM,
            format!("© {}", state.options.style.attribution()),
            egui::FontId::proportional(10.0),
            egui::Color32::from_black_alpha(150),
        );

        events
    }

    fn mount(&mut self, mount_id: MountId, options: &MapOptions) {
        self.memory = MapMemory::default();
        self.memory.center_at(to_position(options.default_center));
        if let Err(e) = self.memory.set_zoom(options.default_zoom) {
            log::warn!("Start-Zoom {} abgelehnt: {:?}", options.default_zoom, e);
        }
        self.mounted = Some(mount_id);
        self.surface_seq += 1;
        self.surface_announced = false;
        log::debug!(
            "Kartenoberfläche {} für {:?} initialisiert",
            self.surface_seq,
            mount_id
        );
    }

    fn apply_commands(&mut self, commands: Vec<ViewportCommand>) {
        for command in commands {
            match command {
                ViewportCommand::PanTo(target) => self.memory.center_at(to_position(target)),
                ViewportCommand::SetZoom(zoom) => {
                    if let Err(e) = self.memory.set_zoom(zoom) {
                        log::warn!("Zoom {} abgelehnt: {:?}", zoom, e);
                    }
                }
            }
        }
    }

    /// Meldet die Oberfläche nach dem ersten Frame als bereit, danach Zoom-Änderungen.
    fn report_zoom(&mut self) -> Option<AppIntent> {
        let zoom = self.memory.zoom();
        if !self.surface_announced {
            self.surface_announced = true;
            self.reported_zoom = zoom;
            return Some(AppIntent::MapSurfaceReady {
                surface: SurfaceId(self.surface_seq),
                zoom,
            });
        }
        if (zoom - self.reported_zoom).abs() > ZOOM_EPSILON {
            self.reported_zoom = zoom;
            return Some(AppIntent::MapZoomChanged { zoom });
        }
        None
    }
}
