//! Layout builders for the three display tiers.
//!
//! Each builder is a pure function of the departure set, the configuration
//! and the caller-supplied clock reading. Column composition is shared:
//! every departure occupies [transport-icon?] [line] [operator?] [time]
//! cells, with the large tier adding a destination cell before the time.

use chrono::{Duration, NaiveDateTime};

use crate::domain::{Departure, DepartureSet};
use crate::translate::{self, HeaderLabel};

use super::config::BoardConfig;
use super::icons::{self, AccessibilityKind, LIVE_ICON};
use super::layout::{Cell, LayoutTable, Row};
use super::time_format::departure_time;

/// Live data older than this many minutes no longer earns the live icon.
const FRESHNESS_MINUTES: i64 = 10;

/// Minimum number of departure blocks a medium-tier data row occupies.
const MEDIUM_MIN_BLOCKS: usize = 3;

/// One row per stop, earliest departure only.
pub fn build_small(set: &DepartureSet, config: &BoardConfig, now: NaiveDateTime) -> LayoutTable {
    let mut table = LayoutTable::new("ovtable-small");
    let show_stop_names = show_stop_names(config, set.len());

    for (stop_name, departures) in set.iter() {
        // Invariant: departure lists are never empty.
        let Some(departure) = departures.first() else {
            continue;
        };

        let mut row = Row::new();
        if show_stop_names {
            row.push(stop_name_cell(stop_name, departure, config));
        }
        push_departure_cells(&mut row, departure, config, now);
        table.push(row);
    }
    table
}

/// Per stop: an optional name row spanning the data columns, then one row
/// holding up to N departures side by side.
///
/// Alignment rule: every data row occupies `max(3, N)` departure-wide
/// blocks, padded on the left with spacer cells when a stop has fewer
/// departures to show. This keeps the time columns of different stops
/// vertically aligned.
pub fn build_medium(set: &DepartureSet, config: &BoardConfig, now: NaiveDateTime) -> LayoutTable {
    let mut table = LayoutTable::new("ovtable-medium");
    let show_stop_names = show_stop_names(config, set.len());
    let block_width = departure_block_width(config);
    let total_blocks = MEDIUM_MIN_BLOCKS.max(config.departures);

    for (stop_name, departures) in set.iter() {
        let Some(first) = departures.first() else {
            continue;
        };
        let shown = config.departures.min(departures.len());
        let padding_blocks = total_blocks - shown;

        if show_stop_names {
            let mut name_row = Row::new();
            name_row.push(
                stop_name_cell(stop_name, first, config)
                    .with_col_span((block_width * total_blocks) as u32),
            );
            table.push(name_row);
        }

        let mut row = Row::new();
        for _ in 0..padding_blocks * block_width {
            row.push(Cell::spacer());
        }
        for departure in &departures[..shown] {
            push_departure_cells(&mut row, departure, config, now);
        }
        table.push(row);
    }
    table
}

/// One row per departure with a destination column, optionally preceded by
/// a shared header row and per-stop name rows.
pub fn build_large(set: &DepartureSet, config: &BoardConfig, now: NaiveDateTime) -> LayoutTable {
    let mut table = LayoutTable::new("ovtable-large");
    let show_stop_names = show_stop_names(config, set.len());
    let extra_columns = extra_column_count(config);

    if config.show_header {
        let lang = config.language;
        let mut header = Row::new();
        header.push(
            Cell::header(translate::header(lang, HeaderLabel::Line))
                .with_col_span((1 + extra_columns) as u32),
        );
        let destination = if show_stop_names {
            format!(
                "{} / {}",
                translate::header(lang, HeaderLabel::StopName),
                translate::header(lang, HeaderLabel::Destination)
            )
        } else {
            translate::header(lang, HeaderLabel::Destination).to_string()
        };
        header.push(Cell::header(destination));
        header.push(Cell::header(translate::header(lang, HeaderLabel::Departure)));
        table.push(header);
    }

    for (stop_name, departures) in set.iter() {
        let Some(first) = departures.first() else {
            continue;
        };

        if show_stop_names {
            let mut name_row = Row::new();
            name_row.push(
                stop_name_cell(stop_name, first, config)
                    .with_col_span((3 + extra_columns) as u32),
            );
            table.push(name_row);
        }

        let shown = config.departures.min(departures.len());
        for departure in &departures[..shown] {
            let mut row = Row::new();
            push_transport_and_line(&mut row, departure, config);
            push_operator(&mut row, departure, config);
            row.push(Cell::text(&departure.destination, "destination"));
            row.push(time_cell(departure, config, now));
            table.push(row);
        }
    }
    table
}

/// Stop names are suppressed only when the board has exactly one stop and
/// the configuration does not insist on them.
fn show_stop_names(config: &BoardConfig, stop_count: usize) -> bool {
    config.always_show_stop_name || stop_count > 1
}

/// Icon and operator columns that widen each departure block.
fn extra_column_count(config: &BoardConfig) -> usize {
    usize::from(config.show_transport_type_icon) + usize::from(config.show_operator)
}

/// Cells one departure occupies in the small and medium tiers.
fn departure_block_width(config: &BoardConfig) -> usize {
    2 + extra_column_count(config)
}

/// The stop-name cell with its icon prefixes: generic stop marker first,
/// then wheelchair and visual accessibility markers as the stop supports
/// them.
fn stop_name_cell(stop_name: &str, first: &Departure, config: &BoardConfig) -> Cell {
    let mut cell = Cell::text(stop_name, "stopname");
    let table = &config.timingpoint_type_icons;

    if config.show_timing_point_icon {
        let kind = AccessibilityKind::Stop;
        cell.prepend_icon(icons::accessibility_icon(table, kind), kind.icon_class());
    }
    if config.show_accessible {
        if first.timing_point_wheelchair_accessible {
            let kind = AccessibilityKind::Wheelchair;
            cell.prepend_icon(icons::accessibility_icon(table, kind), kind.icon_class());
        }
        if first.timing_point_visual_accessible {
            let kind = AccessibilityKind::Visual;
            cell.prepend_icon(icons::accessibility_icon(table, kind), kind.icon_class());
        }
    }
    cell
}

/// The [transport-icon?] [line] [operator?] [time] cell run.
fn push_departure_cells(
    row: &mut Row,
    departure: &Departure,
    config: &BoardConfig,
    now: NaiveDateTime,
) {
    push_transport_and_line(row, departure, config);
    push_operator(row, departure, config);
    row.push(time_cell(departure, config, now));
}

fn push_transport_and_line(row: &mut Row, departure: &Departure, config: &BoardConfig) {
    if config.show_transport_type_icon {
        let mut cell = Cell::empty("transporttype");
        cell.append_icon(
            icons::transport_icon(&config.transport_type_icons, &departure.transport_type),
            "transporticon",
        );
        row.push(cell);
    }

    let mut line = Cell::text(&departure.line_public_number, "line");
    if config.show_accessible && departure.line_wheelchair_accessible {
        let kind = AccessibilityKind::Wheelchair;
        line.append_icon(
            icons::accessibility_icon(&config.timingpoint_type_icons, kind),
            kind.icon_class(),
        );
    }
    row.push(line);
}

fn push_operator(row: &mut Row, departure: &Departure, config: &BoardConfig) {
    if config.show_operator {
        row.push(Cell::text(&departure.operator, "operator"));
    }
}

/// The time cell, with the live icon appended when the data is fresh.
fn time_cell(departure: &Departure, config: &BoardConfig, now: NaiveDateTime) -> Cell {
    let mut cell = Cell::text(
        departure_time(departure, config.show_delay, &config.time_format),
        "time",
    );
    if config.show_live_icon && is_fresh(departure, now) {
        cell.append_icon(LIVE_ICON, "liveicon");
    }
    cell
}

/// A departure without an update timestamp has no live data and is never
/// fresh, no matter how near its departure time is.
fn is_fresh(departure: &Departure, now: NaiveDateTime) -> bool {
    departure.last_update.is_some_and(|last_update| {
        now.signed_duration_since(last_update) < Duration::minutes(FRESHNESS_MINUTES)
    })
}
