//! Top-level board composition.
//!
//! [`compose`] is the single entry point the renderer calls on every
//! refresh: it checks the latched error conditions in order and otherwise
//! dispatches to the tier builder for the configured display mode.

use chrono::NaiveDateTime;

use crate::domain::DepartureSet;

use super::config::{BoardConfig, ConfigError, DisplayMode};
use super::engine;
use super::layout::LayoutTable;

/// Diagnostic shown instead of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMessage {
    /// No timing point or stop area configured (permanent).
    NotConfigured,
    /// Display mode outside small/medium/large (permanent).
    InvalidDisplayMode,
    /// The last fetch failed; cleared by the next successful one.
    FetchFailed,
    /// No data has arrived yet.
    Loading,
    /// A successful fetch produced zero stops.
    NoData,
}

/// The module's data state, replaced wholesale on every provider
/// notification. Nothing mutates a snapshot in place, so a render that
/// holds one never observes a half-applied update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Whether at least one fetch has succeeded since startup.
    pub loaded: bool,
    /// Error description from the most recent failed fetch, if it failed.
    pub error: Option<String>,
    pub departures: DepartureSet,
}

impl BoardSnapshot {
    /// The state before any fetch has completed.
    pub fn initial() -> Self {
        Self::default()
    }

    /// A successful fetch: replaces the data and clears any error latch.
    pub fn loaded(departures: DepartureSet) -> Self {
        Self {
            loaded: true,
            error: None,
            departures,
        }
    }

    /// A failed fetch: latches the error, keeping the previous data and
    /// loaded flag so recovery resumes where it left off.
    pub fn failed(previous: &Self, error: impl Into<String>) -> Self {
        Self {
            loaded: previous.loaded,
            error: Some(error.into()),
            departures: previous.departures.clone(),
        }
    }
}

/// What a render produces: a full layout or a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardContent {
    Table(LayoutTable),
    Message(BoardMessage),
}

/// Compose the board for the given snapshot.
///
/// `now` is the render-time clock reading; it drives live-icon freshness
/// and nothing else. Never panics and never returns a zero-row table:
/// every degenerate state maps to a [`BoardMessage`].
pub fn compose(config: &BoardConfig, snapshot: &BoardSnapshot, now: NaiveDateTime) -> BoardContent {
    let mode = match config.validate() {
        Ok(mode) => mode,
        Err(ConfigError::NoStopConfigured) => {
            return BoardContent::Message(BoardMessage::NotConfigured);
        }
        Err(ConfigError::InvalidDisplayMode(_)) => {
            return BoardContent::Message(BoardMessage::InvalidDisplayMode);
        }
    };

    if snapshot.error.is_some() {
        return BoardContent::Message(BoardMessage::FetchFailed);
    }
    if !snapshot.loaded {
        return BoardContent::Message(BoardMessage::Loading);
    }
    if snapshot.departures.is_empty() {
        return BoardContent::Message(BoardMessage::NoData);
    }

    let table = match mode {
        DisplayMode::Small => engine::build_small(&snapshot.departures, config, now),
        DisplayMode::Medium => engine::build_medium(&snapshot.departures, config, now),
        DisplayMode::Large => engine::build_large(&snapshot.departures, config, now),
    };
    BoardContent::Table(table)
}
