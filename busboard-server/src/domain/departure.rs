//! Departure records and the per-stop departure set.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::debug;

use super::TransportType;

/// One scheduled transit event at a stop.
///
/// Immutable once constructed; the provider builds these from API payloads
/// and the board compositor only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// The public line number as printed on the vehicle (e.g. "18", "M5").
    pub line_public_number: String,

    /// Human-readable destination of the vehicle.
    pub destination: String,

    /// Kind of vehicle.
    pub transport_type: TransportType,

    /// Operating company name or code.
    pub operator: String,

    /// Scheduled departure time.
    pub target_departure: NaiveDateTime,

    /// Live-estimated departure time. Equals the target when no live data
    /// is available.
    pub expected_departure: NaiveDateTime,

    /// When the live estimate was last refreshed upstream. `None` when the
    /// feed sent no update timestamp, meaning there is no live data at all.
    pub last_update: Option<NaiveDateTime>,

    /// Whether the stop itself is wheelchair accessible.
    pub timing_point_wheelchair_accessible: bool,

    /// Whether the stop has guidance for visually impaired travellers.
    pub timing_point_visual_accessible: bool,

    /// Whether the vehicle on this line is wheelchair accessible.
    pub line_wheelchair_accessible: bool,
}

/// Upcoming departures grouped by stop name.
///
/// Keys are stop display names; iteration is always in lexicographically
/// ascending key order (this is what keeps stop ordering stable in every
/// display tier). Two invariants hold for every entry:
///
/// - the departure list is never empty (empty stops are dropped on insert);
/// - the list is sorted ascending by expected departure time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartureSet {
    stops: BTreeMap<String, Vec<Departure>>,
}

impl DepartureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add departures for a stop, sorting them by expected departure time.
    ///
    /// An empty list is dropped (a stop with nothing to show has no place
    /// on the board). Inserting under an existing name merges the lists
    /// and re-sorts; this happens when a stop area spans multiple timing
    /// points with the same display name.
    pub fn insert(&mut self, stop_name: impl Into<String>, mut departures: Vec<Departure>) {
        let stop_name = stop_name.into();
        if departures.is_empty() {
            debug!(stop = %stop_name, "dropping stop with no departures");
            return;
        }
        let entry = self.stops.entry(stop_name).or_default();
        entry.append(&mut departures);
        entry.sort_by_key(|d| d.expected_departure);
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Departures at a single stop, if present.
    pub fn get(&self, stop_name: &str) -> Option<&[Departure]> {
        self.stops.get(stop_name).map(Vec::as_slice)
    }

    /// Iterate stops in lexicographically ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Departure])> {
        self.stops.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<(String, Vec<Departure>)> for DepartureSet {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Departure>)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, departures) in iter {
            set.insert(name, departures);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn departure(line: &str, expected: NaiveDateTime) -> Departure {
        Departure {
            line_public_number: line.to_string(),
            destination: "Centraal Station".to_string(),
            transport_type: TransportType::Bus,
            operator: "GVB".to_string(),
            target_departure: expected,
            expected_departure: expected,
            last_update: Some(expected),
            timing_point_wheelchair_accessible: false,
            timing_point_visual_accessible: false,
            line_wheelchair_accessible: false,
        }
    }

    #[test]
    fn empty_stop_is_dropped() {
        let mut set = DepartureSet::new();
        set.insert("Dam", vec![]);
        assert!(set.is_empty());
        assert!(set.get("Dam").is_none());
    }

    #[test]
    fn departures_sorted_by_expected_time() {
        let mut set = DepartureSet::new();
        set.insert(
            "Dam",
            vec![
                departure("3", at(10, 30)),
                departure("1", at(10, 10)),
                departure("2", at(10, 20)),
            ],
        );

        let lines: Vec<&str> = set.get("Dam").unwrap()
            .iter()
            .map(|d| d.line_public_number.as_str())
            .collect();
        assert_eq!(lines, ["1", "2", "3"]);
    }

    #[test]
    fn iteration_in_lexicographic_order() {
        let mut set = DepartureSet::new();
        set.insert("Zuid", vec![departure("5", at(10, 0))]);
        set.insert("Dam", vec![departure("1", at(10, 0))]);
        set.insert("Leidseplein", vec![departure("2", at(10, 0))]);

        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Dam", "Leidseplein", "Zuid"]);
    }

    #[test]
    fn merging_same_name_resorts() {
        let mut set = DepartureSet::new();
        set.insert("Dam", vec![departure("2", at(10, 20))]);
        set.insert("Dam", vec![departure("1", at(10, 10))]);

        assert_eq!(set.len(), 1);
        let lines: Vec<&str> = set.get("Dam").unwrap()
            .iter()
            .map(|d| d.line_public_number.as_str())
            .collect();
        assert_eq!(lines, ["1", "2"]);
    }

    #[test]
    fn from_iterator() {
        let set: DepartureSet = vec![
            ("B".to_string(), vec![departure("1", at(9, 0))]),
            ("A".to_string(), vec![departure("2", at(9, 5))]),
            ("C".to_string(), vec![]),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["A", "B"]);
    }
}
