//! Timestamp parsing for departure records.
//!
//! The OV API emits local ISO-8601 timestamps without a zone suffix
//! (`2024-03-15T10:45:00`); some mirrors add a zone or send epoch
//! milliseconds instead. All three forms are accepted here.

use chrono::{DateTime, NaiveDateTime};

/// Error returned when a timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {value:?}: {reason}")]
pub struct TimeError {
    value: String,
    reason: &'static str,
}

impl TimeError {
    fn new(value: &str, reason: &'static str) -> Self {
        Self {
            value: value.to_string(),
            reason,
        }
    }
}

/// Parse a departure timestamp.
///
/// Accepted forms, tried in order:
/// - epoch milliseconds as a decimal string, interpreted as UTC;
/// - ISO-8601 with a zone offset (`2024-03-15T10:45:00+01:00`), converted
///   to its local wall-clock time;
/// - ISO-8601 without a zone, with or without fractional seconds.
///
/// # Examples
///
/// ```
/// use busboard_server::domain::parse_timestamp;
///
/// let t = parse_timestamp("2024-03-15T10:45:00").unwrap();
/// assert_eq!(t.format("%H:%M").to_string(), "10:45");
///
/// assert!(parse_timestamp("not a time").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimeError> {
    if s.is_empty() {
        return Err(TimeError::new(s, "empty string"));
    }

    // Epoch milliseconds: all digits.
    if s.bytes().all(|b| b.is_ascii_digit()) {
        let millis: i64 = s
            .parse()
            .map_err(|_| TimeError::new(s, "epoch millis out of range"))?;
        return DateTime::from_timestamp_millis(millis)
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| TimeError::new(s, "epoch millis out of range"));
    }

    // Zoned ISO-8601.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    // Zoneless ISO-8601, optional fractional seconds, T or space separator.
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    Err(TimeError::new(s, "unrecognized format"))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_datetime_string()(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) -> String {
            format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}")
        }
    }

    proptest! {
        /// Any well-formed zoneless ISO-8601 timestamp parses.
        #[test]
        fn valid_iso_parses(s in valid_datetime_string()) {
            prop_assert!(parse_timestamp(&s).is_ok());
        }

        /// Parse then re-format roundtrips.
        #[test]
        fn parse_format_roundtrip(s in valid_datetime_string()) {
            let t = parse_timestamp(&s).unwrap();
            prop_assert_eq!(t.format("%Y-%m-%dT%H:%M:%S").to_string(), s);
        }

        /// Any non-negative epoch-millis string in range parses.
        #[test]
        fn epoch_millis_parses(millis in 0i64..4_102_444_800_000) {
            prop_assert!(parse_timestamp(&millis.to_string()).is_ok());
        }
    }
}
