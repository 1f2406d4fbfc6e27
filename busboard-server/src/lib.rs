//! Public transport departure board server.
//!
//! Polls the OV API for upcoming departures at one or more stops and
//! renders them as a compact departure board in one of three display
//! densities.

pub mod board;
pub mod domain;
pub mod poller;
pub mod provider;
pub mod translate;
pub mod web;
