//! The departure board compositor.
//!
//! A pure function of (departure data, configuration, clock reading) to an
//! abstract layout: no I/O and no clock reads happen inside this module.
//! The web layer feeds it snapshots and renders whatever comes out.

mod compose;
mod config;
mod engine;
mod icons;
mod layout;
mod time_format;

pub use compose::{BoardContent, BoardMessage, BoardSnapshot, compose};
pub use config::{BoardConfig, ConfigError, DisplayMode, StopSelection};
pub use icons::{AccessibilityKind, IconTable, LIVE_ICON};
pub use layout::{Cell, CellPart, CellRole, LayoutTable, Row};
pub use time_format::departure_time;
