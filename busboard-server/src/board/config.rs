//! Board configuration.
//!
//! Constructed once at startup and read-only thereafter. Deserializable
//! from a JSON file; every field has the module's traditional default so a
//! minimal config only needs a display mode and something to poll.

use std::str::FromStr;

use serde::Deserialize;

use super::icons::IconTable;
use crate::translate::Language;

/// Startup configuration errors. Latched for the lifetime of the instance:
/// the poller is never started and every render yields the matching message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("neither a timing point code nor a stop area code is configured")]
    NoStopConfigured,

    #[error("invalid display mode {0:?} (expected small, medium or large)")]
    InvalidDisplayMode(String),
}

/// The three display density tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Small,
    Medium,
    Large,
}

impl FromStr for DisplayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(DisplayMode::Small),
            "medium" => Ok(DisplayMode::Medium),
            "large" => Ok(DisplayMode::Large),
            other => Err(ConfigError::InvalidDisplayMode(other.to_string())),
        }
    }
}

/// Which stops the provider should poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopSelection {
    /// One or more individual timing point codes.
    TimingPoints(Vec<String>),
    /// A whole stop area.
    StopArea(String),
}

/// All board options.
///
/// `display_mode` is kept as the raw configured string; [`BoardConfig::validate`]
/// turns it into a [`DisplayMode`] or the latched error, so a bad value still
/// loads and renders its diagnostic instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// "small", "medium" or "large".
    pub display_mode: String,

    /// Timing point codes to poll.
    pub timing_point_codes: Vec<String>,

    /// Stop area code to poll; used when no timing point codes are set.
    pub stop_area_code: Option<String>,

    /// Maximum departures shown per stop.
    pub departures: usize,

    /// Prefix stop names with their town name.
    pub show_town_name: bool,

    /// Query the departures-only endpoint variant.
    pub show_only_departures: bool,

    /// Show scheduled time plus signed delay instead of the live time.
    pub show_delay: bool,

    /// Emit a column header row (large tier only).
    pub show_header: bool,

    /// Show the stop name even when only one stop is on the board.
    pub always_show_stop_name: bool,

    /// Prefix stop-name cells with the generic stop icon.
    pub show_timing_point_icon: bool,

    /// Add a transport-type icon column.
    pub show_transport_type_icon: bool,

    /// Mark the time cell when live data is fresh.
    pub show_live_icon: bool,

    /// Show wheelchair/visual accessibility icons.
    pub show_accessible: bool,

    /// Add an operator column.
    pub show_operator: bool,

    /// Transport type to icon id.
    pub transport_type_icons: IconTable,

    /// Accessibility kind to icon id.
    pub timingpoint_type_icons: IconTable,

    /// Seconds between data refreshes.
    pub refresh_interval_secs: u64,

    /// chrono strftime pattern for departure times.
    pub time_format: String,

    /// Language for board messages and headers.
    pub language: Language,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            display_mode: String::new(),
            timing_point_codes: Vec::new(),
            stop_area_code: None,
            departures: 3,
            show_town_name: false,
            show_only_departures: true,
            show_delay: false,
            show_header: false,
            always_show_stop_name: true,
            show_timing_point_icon: false,
            show_transport_type_icon: false,
            show_live_icon: false,
            show_accessible: false,
            show_operator: false,
            transport_type_icons: IconTable::from([
                ("BUS", "bus"),
                ("TRAM", "train"),
                ("METRO", "subway"),
                ("BOAT", "ship"),
                ("default", "question-circle"),
            ]),
            timingpoint_type_icons: IconTable::from([
                ("WHEELCHAIR", "wheelchair"),
                ("VISUAL", "blind"),
                ("default", "sign"),
            ]),
            refresh_interval_secs: 300,
            time_format: "%H:%M".to_string(),
            language: Language::En,
        }
    }
}

impl BoardConfig {
    /// Check the startup-latched conditions.
    ///
    /// Order matters: a missing stop selection is reported before a bad
    /// display mode.
    pub fn validate(&self) -> Result<DisplayMode, ConfigError> {
        self.stop_selection()?;
        self.display_mode.parse()
    }

    /// What the provider should poll.
    pub fn stop_selection(&self) -> Result<StopSelection, ConfigError> {
        if !self.timing_point_codes.is_empty() {
            return Ok(StopSelection::TimingPoints(self.timing_point_codes.clone()));
        }
        match &self.stop_area_code {
            Some(code) if !code.is_empty() => Ok(StopSelection::StopArea(code.clone())),
            _ => Err(ConfigError::NoStopConfigured),
        }
    }
}
