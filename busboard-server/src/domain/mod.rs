//! Domain types for the departure board.
//!
//! This module contains the core data model: validated departure records
//! grouped per timing point (stop). All validation happens when the types
//! are constructed at the provider boundary, so the board compositor can
//! trust what it receives.

mod departure;
mod time;
mod transport;

pub use departure::{Departure, DepartureSet};
pub use time::{TimeError, parse_timestamp};
pub use transport::TransportType;
