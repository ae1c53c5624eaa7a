//! Core types for CaesarForum.
//!
//! Events are planned on a date with an hour range; sessions are arranged on a
//! room × half-hour timeline inside each event. This crate owns:
//! - the data model (`event`, `session`, `room`, `time_of_day`)
//! - the timeline grid (`slots`, `selection`, `occupancy`, `colors`, `grid`)
//! - the store seam used in place of a hosted backend (`store`, `persist`)

pub mod colors;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod occupancy;
pub mod persist;
pub mod room;
pub mod selection;
pub mod session;
pub mod slots;
pub mod store;
pub mod time_of_day;

pub use error::{CaesarError, CaesarResult};
pub use time_of_day::TimeOfDay;
