//! Core-Domänentypen: Koordinaten, Marker, Viewport-Handle.

pub mod coordinate;
pub mod marker;
pub mod marker_list;
pub mod viewport;

pub use coordinate::GeoCoordinate;
pub use marker::{MarkerId, TrashCanMarker};
pub use marker_list::MarkerList;
pub use viewport::{SurfaceId, ViewportCommand, ViewportHandle};
