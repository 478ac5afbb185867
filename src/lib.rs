//! Trash Can Map Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod services;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, RecenterSource, UiState};
pub use core::{GeoCoordinate, MarkerId, MarkerList, TrashCanMarker, ViewportCommand};
pub use services::{Geocoder, JobRunner, LocationProvider};
pub use shared::{format_relative, MapOptions, MapStyle};
