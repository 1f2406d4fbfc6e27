//! OV API response DTOs.
//!
//! These types map directly to the OV API JSON responses. Field names on
//! the wire are PascalCase; `Option` is used liberally because the feed
//! omits fields rather than sending null in many cases.

use std::collections::HashMap;

use serde::Deserialize;

/// Response from `tpc/{codes}[/departures]`: one document per requested
/// timing point code.
pub type TimingPointResponse = HashMap<String, TimingPointDocument>;

/// Response from `stopareacode/{code}[/departures]`: timing point
/// documents nested under the stop area code.
pub type StopAreaResponse = HashMap<String, HashMap<String, TimingPointDocument>>;

/// One timing point: its stop metadata plus the upcoming passes.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingPointDocument {
    #[serde(rename = "Stop")]
    pub stop: StopInfo,

    /// Upcoming vehicle passes keyed by journey identifier. Key order is
    /// meaningless; ordering happens during conversion.
    #[serde(rename = "Passes", default)]
    pub passes: HashMap<String, Pass>,
}

/// Stop metadata for a timing point.
#[derive(Debug, Clone, Deserialize)]
pub struct StopInfo {
    #[serde(rename = "TimingPointName")]
    pub timing_point_name: String,

    #[serde(rename = "TimingPointTown")]
    pub timing_point_town: Option<String>,

    #[serde(rename = "TimingPointWheelChairAccessible")]
    pub wheelchair_accessible: Option<Accessibility>,

    #[serde(rename = "TimingPointVisualAccessible")]
    pub visual_accessible: Option<Accessibility>,
}

/// One upcoming vehicle pass at a timing point.
#[derive(Debug, Clone, Deserialize)]
pub struct Pass {
    #[serde(rename = "LinePublicNumber")]
    pub line_public_number: String,

    #[serde(rename = "DestinationName50")]
    pub destination_name: String,

    #[serde(rename = "TransportType")]
    pub transport_type: String,

    #[serde(rename = "OperatorName")]
    pub operator_name: Option<String>,

    #[serde(rename = "OperatorCode")]
    pub operator_code: Option<String>,

    #[serde(rename = "TargetDepartureTime")]
    pub target_departure_time: String,

    #[serde(rename = "ExpectedDepartureTime")]
    pub expected_departure_time: String,

    #[serde(rename = "LastUpdateTimeStamp")]
    pub last_update_time_stamp: Option<String>,

    #[serde(rename = "LineWheelChairAccessible")]
    pub line_wheelchair_accessible: Option<Accessibility>,
}

/// Tri-state accessibility marker as the feed sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Accessibility {
    Accessible,
    NotAccessible,
    Unknown,
}

impl Accessibility {
    /// Collapse to a display decision: only a positive marker shows an icon.
    pub fn is_accessible(self) -> bool {
        self == Accessibility::Accessible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "31000495": {
            "Stop": {
                "TimingPointName": "Dam",
                "TimingPointTown": "Amsterdam",
                "TimingPointWheelChairAccessible": "ACCESSIBLE",
                "TimingPointVisualAccessible": "UNKNOWN"
            },
            "Passes": {
                "GVB_20240315_1234": {
                    "LinePublicNumber": "4",
                    "DestinationName50": "Station RAI",
                    "TransportType": "TRAM",
                    "OperatorName": "GVB",
                    "TargetDepartureTime": "2024-03-15T10:45:00",
                    "ExpectedDepartureTime": "2024-03-15T10:47:00",
                    "LastUpdateTimeStamp": "2024-03-15T10:40:12",
                    "LineWheelChairAccessible": "NOTACCESSIBLE"
                }
            }
        }
    }"#;

    #[test]
    fn deserialize_timing_point_response() {
        let response: TimingPointResponse = serde_json::from_str(SAMPLE).unwrap();
        let doc = &response["31000495"];

        assert_eq!(doc.stop.timing_point_name, "Dam");
        assert_eq!(doc.stop.timing_point_town.as_deref(), Some("Amsterdam"));
        assert_eq!(
            doc.stop.wheelchair_accessible,
            Some(Accessibility::Accessible)
        );
        assert_eq!(doc.stop.visual_accessible, Some(Accessibility::Unknown));

        let pass = &doc.passes["GVB_20240315_1234"];
        assert_eq!(pass.line_public_number, "4");
        assert_eq!(pass.destination_name, "Station RAI");
        assert_eq!(pass.transport_type, "TRAM");
        assert_eq!(pass.operator_name.as_deref(), Some("GVB"));
        assert_eq!(pass.expected_departure_time, "2024-03-15T10:47:00");
        assert_eq!(
            pass.line_wheelchair_accessible,
            Some(Accessibility::NotAccessible)
        );
    }

    #[test]
    fn deserialize_stop_area_response() {
        let json = format!(r#"{{"amrcs": {}}}"#, SAMPLE);
        let response: StopAreaResponse = serde_json::from_str(&json).unwrap();
        assert!(response["amrcs"].contains_key("31000495"));
    }

    #[test]
    fn missing_passes_defaults_to_empty() {
        let json = r#"{"31000495": {"Stop": {"TimingPointName": "Dam"}}}"#;
        let response: TimingPointResponse = serde_json::from_str(json).unwrap();
        assert!(response["31000495"].passes.is_empty());
    }

    #[test]
    fn only_positive_marker_is_accessible() {
        assert!(Accessibility::Accessible.is_accessible());
        assert!(!Accessibility::NotAccessible.is_accessible());
        assert!(!Accessibility::Unknown.is_accessible());
    }
}
