//! Trash Can Map.
//!
//! Kartenansicht zum Markieren von Mülleimern: Klick im Platzierungsmodus
//! setzt einen Marker, Suche und Standort zentrieren die Karte.

use std::sync::Arc;

use eframe::egui;
use trash_can_map::services::{IpLocationProvider, NominatimGeocoder};
use trash_can_map::{ui, AppController, AppIntent, AppState, JobRunner, MapOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Trash Can Map v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Trash Can Map"),
            ..Default::default()
        };

        eframe::run_native(
            "Trash Can Map",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(MapApp::new(&cc.egui_ctx)?))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct MapApp {
    state: AppState,
    controller: AppController,
    map_panel: ui::MapPanel,
    jobs: JobRunner,
    mounted: bool,
}

impl MapApp {
    fn new(ctx: &egui::Context) -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = MapOptions::config_path();
        let mut map_options = MapOptions::load_or_create(&config_path);
        map_options.apply_env_overrides();

        if map_options.style.prefers_dark_ui() {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        let geocoder = NominatimGeocoder::new(&map_options)?;
        let location = IpLocationProvider::new(&map_options)?;
        let repaint_ctx = ctx.clone();
        let jobs = JobRunner::new(
            Arc::new(geocoder),
            Arc::new(location),
            map_options.search_result_limit,
        )
        .with_wake(Arc::new(move || repaint_ctx.request_repaint()));

        Ok(Self {
            state: AppState::with_options(map_options),
            controller: AppController::new(),
            map_panel: ui::MapPanel::new(),
            jobs,
            mounted: false,
        })
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = Vec::new();
        if !self.mounted {
            self.mounted = true;
            events.push(AppIntent::MapViewMounted);
        }
        events.extend(self.jobs.poll());
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::MapZoomChanged { .. }));

        self.process_events(events);

        self.jobs.dispatch(&mut self.state);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl MapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let loaded = self.state.is_sdk_loaded();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::show_onboarding_alert(
            ctx,
            self.state.map_view.alert_visible,
        ));

        let commands = self
            .state
            .map_view
            .viewport
            .as_mut()
            .map(|handle| handle.drain())
            .unwrap_or_default();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                events.extend(self.map_panel.render(ui, &self.state, commands));
            });

        if loaded {
            events.extend(ui::render_search_widget(ctx, &mut self.state.ui, loaded));
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || !self.state.is_sdk_loaded()
            || self.jobs.running() > 0
            || self
                .state
                .map_view
                .viewport
                .as_ref()
                .is_some_and(|h| !h.pending().is_empty())
        {
            ctx.request_repaint();
        } else if self.state.map_view.selection.selected_marker.is_some() {
            // Relative Zeitangabe im Detail-Popup aktuell halten
            ctx.request_repaint_after(std::time::Duration::from_secs(30));
        }
    }
}
