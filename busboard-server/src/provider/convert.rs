//! Conversion from OV API DTOs to the validated domain model.

use tracing::warn;

use crate::domain::{Departure, DepartureSet, TransportType, parse_timestamp};

use super::types::{Accessibility, Pass, StopInfo, TimingPointDocument};

/// Convert fetched timing point documents into a [`DepartureSet`].
///
/// With `show_town_name` the stop key becomes "Town, Name". Passes with
/// unparseable timestamps are skipped with a warning rather than failing
/// the whole refresh: one malformed record should not blank the board.
/// Stops whose passes all fail (or that have none) are dropped, keeping
/// the set's no-empty-stops invariant.
pub fn convert_documents<I>(documents: I, show_town_name: bool) -> DepartureSet
where
    I: IntoIterator<Item = TimingPointDocument>,
{
    let mut set = DepartureSet::new();

    for doc in documents {
        let name = stop_display_name(&doc.stop, show_town_name);
        let departures: Vec<Departure> = doc
            .passes
            .into_values()
            .filter_map(|pass| match convert_pass(pass, &doc.stop) {
                Ok(departure) => Some(departure),
                Err(err) => {
                    warn!(stop = %name, error = %err, "skipping unparseable pass");
                    None
                }
            })
            .collect();
        set.insert(name, departures);
    }
    set
}

fn stop_display_name(stop: &StopInfo, show_town_name: bool) -> String {
    match (&stop.timing_point_town, show_town_name) {
        (Some(town), true) if !town.is_empty() => {
            format!("{}, {}", town, stop.timing_point_name)
        }
        _ => stop.timing_point_name.clone(),
    }
}

fn convert_pass(pass: Pass, stop: &StopInfo) -> Result<Departure, crate::domain::TimeError> {
    let target_departure = parse_timestamp(&pass.target_departure_time)?;
    let expected_departure = parse_timestamp(&pass.expected_departure_time)?;
    // No update timestamp means the feed has no live data for this pass.
    let last_update = pass
        .last_update_time_stamp
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;

    let operator = pass
        .operator_name
        .or(pass.operator_code)
        .unwrap_or_default();

    Ok(Departure {
        line_public_number: pass.line_public_number,
        destination: pass.destination_name,
        transport_type: TransportType::from(pass.transport_type),
        operator,
        target_departure,
        expected_departure,
        last_update,
        timing_point_wheelchair_accessible: is_accessible(stop.wheelchair_accessible),
        timing_point_visual_accessible: is_accessible(stop.visual_accessible),
        line_wheelchair_accessible: is_accessible(pass.line_wheelchair_accessible),
    })
}

fn is_accessible(marker: Option<Accessibility>) -> bool {
    marker.is_some_and(Accessibility::is_accessible)
}
