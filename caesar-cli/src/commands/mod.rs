pub mod events;
pub mod rooms;
pub mod session;
pub mod timeline;

use anyhow::{Context, Result};
use caesar_core::grid::TimelineGrid;
use caesar_core::room::Room;
use caesar_core::time_of_day::TimeOfDay;
use chrono::NaiveDate;

/// Parse a YYYY-MM-DD command line date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

/// Find a room by id, then by case-insensitive name.
pub fn resolve_room<'a>(rooms: &'a [Room], query: &str) -> Result<&'a Room> {
    rooms
        .iter()
        .find(|r| r.id == query)
        .or_else(|| rooms.iter().find(|r| r.name.eq_ignore_ascii_case(query)))
        .ok_or_else(|| {
            let available: Vec<_> = rooms.iter().map(|r| r.name.as_str()).collect();
            anyhow::anyhow!(
                "Room '{}' not found. Available: {}",
                query,
                available.join(", ")
            )
        })
}

/// Slot index of a `HH:MM` time on the grid.
pub fn slot_index(grid: &TimelineGrid, time: &str) -> Result<usize> {
    let time: TimeOfDay = time.parse()?;
    grid.slots()
        .iter()
        .find(|s| s.time == time)
        .map(|s| s.index)
        .ok_or_else(|| match grid.event() {
            Some(event) => anyhow::anyhow!(
                "{} is not a slot of '{}' ({} - {}, every 30 minutes)",
                time,
                event.title,
                event.start_hour,
                event.end_hour
            ),
            None => anyhow::anyhow!("No event loaded"),
        })
}
