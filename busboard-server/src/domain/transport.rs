//! Transport type classification.

use std::fmt;

use serde::Deserialize;

/// The kind of vehicle serving a departure.
///
/// The OV API sends free-form uppercase strings. The common ones get their
/// own variant; anything else is preserved verbatim in [`TransportType::Other`]
/// rather than rejected, because an unknown vehicle type is still a valid
/// departure (it just falls back to the default icon).
///
/// # Examples
///
/// ```
/// use busboard_server::domain::TransportType;
///
/// assert_eq!(TransportType::from("BUS"), TransportType::Bus);
/// assert_eq!(TransportType::from("FUNICULAR").as_key(), "FUNICULAR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportType {
    Bus,
    Tram,
    Metro,
    Boat,
    /// Any transport type not in the closed set, kept as received.
    Other(String),
}

impl TransportType {
    /// The key used for icon table lookups.
    pub fn as_key(&self) -> &str {
        match self {
            TransportType::Bus => "BUS",
            TransportType::Tram => "TRAM",
            TransportType::Metro => "METRO",
            TransportType::Boat => "BOAT",
            TransportType::Other(s) => s,
        }
    }
}

impl From<&str> for TransportType {
    fn from(s: &str) -> Self {
        match s {
            "BUS" => TransportType::Bus,
            "TRAM" => TransportType::Tram,
            "METRO" => TransportType::Metro,
            "BOAT" => TransportType::Boat,
            other => TransportType::Other(other.to_string()),
        }
    }
}

impl From<String> for TransportType {
    fn from(s: String) -> Self {
        TransportType::from(s.as_str())
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl<'de> Deserialize<'de> for TransportType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TransportType::from(s))
    }
}
