//! Departure time strings.

use chrono::Duration;

use crate::domain::Departure;

/// Minus glyph for early departures; wider than a hyphen so it reads
/// clearly at dashboard distance.
const MINUS: &str = "\u{2013}";

/// Format the departure time for display.
///
/// Without `show_delay` this is simply the live expected time. With it, the
/// scheduled time is shown with a signed whole-minute offset: `+N` when the
/// vehicle is expected late, `–N` when early. The offset magnitude is
/// rounded down, so a 90-second deviation reads as 1 minute and anything
/// under a minute shows no suffix at all. Better to be at the stop early
/// than to miss the bus.
///
/// `pattern` is a chrono strftime pattern, e.g. `%H:%M`.
pub fn departure_time(departure: &Departure, show_delay: bool, pattern: &str) -> String {
    if !show_delay {
        return departure.expected_departure.format(pattern).to_string();
    }

    let deviation = departure
        .expected_departure
        .signed_duration_since(departure.target_departure);
    let minutes = deviation.num_seconds().abs() / 60;

    let mut time = departure.target_departure.format(pattern).to_string();
    if minutes > 0 {
        let sign = if deviation < Duration::zero() { MINUS } else { "+" };
        time.push_str(sign);
        time.push_str(&minutes.to_string());
    }
    time
}

#[cfg(test)]
fn at(hour: u32, minute: u32, second: u32) -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

#[cfg(test)]
fn departure(target: chrono::NaiveDateTime, expected: chrono::NaiveDateTime) -> Departure {
    use crate::domain::TransportType;
    Departure {
        line_public_number: "18".to_string(),
        destination: "Sloterdijk".to_string(),
        transport_type: TransportType::Bus,
        operator: "GVB".to_string(),
        target_departure: target,
        expected_departure: expected,
        last_update: Some(expected),
        timing_point_wheelchair_accessible: false,
        timing_point_visual_accessible: false,
        line_wheelchair_accessible: false,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Delay mode equals plain mode whenever target == expected.
        #[test]
        fn equal_times_agree_across_modes(hour in 0u32..24, minute in 0u32..60) {
            let t = at(hour, minute, 0);
            let d = departure(t, t);
            prop_assert_eq!(
                departure_time(&d, true, "%H:%M"),
                departure_time(&d, false, "%H:%M")
            );
        }

        /// The suffix magnitude is the deviation in whole minutes, rounded down.
        #[test]
        fn suffix_magnitude_is_floored_minutes(
            offset_secs in -7200i64..7200
        ) {
            let target = at(12, 0, 0);
            let expected = target + Duration::seconds(offset_secs);
            let d = departure(target, expected);

            let rendered = departure_time(&d, true, "%H:%M");
            let minutes = offset_secs.abs() / 60;

            if minutes == 0 {
                prop_assert_eq!(rendered, "12:00");
            } else if offset_secs > 0 {
                prop_assert_eq!(rendered, format!("12:00+{minutes}"));
            } else {
                prop_assert_eq!(rendered, format!("12:00\u{2013}{minutes}"));
            }
        }
    }
}
