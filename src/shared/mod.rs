//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Formatierung, die von `app`, `services` und
//! `ui` gemeinsam genutzt werden.

pub mod options;
mod relative_time;

pub use options::{MapOptions, MapStyle};
pub use relative_time::format_relative;
