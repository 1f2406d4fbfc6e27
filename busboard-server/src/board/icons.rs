//! Icon resolution from configuration-supplied lookup tables.
//!
//! Stateless: these functions return icon identifiers, never rendered
//! elements. Where an icon lands inside a cell is the layout engine's
//! decision.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::TransportType;

/// Icon shown on the time cell when live data is fresh.
pub const LIVE_ICON: &str = "wifi";

/// A configured mapping from semantic key to icon identifier.
///
/// Lookups fall back to the `default` entry for unknown keys, and to the
/// empty string when the table has no `default` either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct IconTable {
    entries: HashMap<String, String>,
}

impl IconTable {
    pub fn resolve(&self, key: &str) -> &str {
        self.entries
            .get(key)
            .or_else(|| self.entries.get("default"))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl<const N: usize> From<[(&str, &str); N]> for IconTable {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// The closed set of timing-point icon kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessibilityKind {
    Wheelchair,
    Visual,
    /// The generic "this is a stop" marker.
    Stop,
}

impl AccessibilityKind {
    /// Lookup key in the configured timing-point icon table.
    pub fn key(self) -> &'static str {
        match self {
            AccessibilityKind::Wheelchair => "WHEELCHAIR",
            AccessibilityKind::Visual => "VISUAL",
            AccessibilityKind::Stop => "default",
        }
    }

    /// Styling tag for the resolved icon.
    pub fn icon_class(self) -> &'static str {
        match self {
            AccessibilityKind::Stop => "timingpointicon",
            _ => "accessibilityicon",
        }
    }
}

/// Resolve the icon for a transport type, with `default` fallback.
pub fn transport_icon<'a>(table: &'a IconTable, transport: &TransportType) -> &'a str {
    table.resolve(transport.as_key())
}

/// Resolve a timing-point icon, with `default` fallback.
pub fn accessibility_icon(table: &IconTable, kind: AccessibilityKind) -> &str {
    table.resolve(kind.key())
}
