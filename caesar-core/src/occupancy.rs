//! Which session, if any, occupies a given room at a given time.

use std::collections::HashMap;

use crate::session::Session;
use crate::time_of_day::TimeOfDay;

#[derive(Debug, Clone, Copy)]
struct Interval {
    start: TimeOfDay,
    end: TimeOfDay,
    /// Position of the session in the source list.
    position: usize,
}

/// Per-room interval index over a list of sessions.
///
/// Intervals are half-open: a session `[18:00, 19:00)` occupies the 18:00
/// and 18:30 slots but not 19:00. When sessions overlap, the one that comes
/// first in the source list wins.
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    by_room: HashMap<String, Vec<Interval>>,
}

impl OccupancyIndex {
    pub fn build(sessions: &[Session]) -> Self {
        let mut by_room: HashMap<String, Vec<Interval>> = HashMap::new();

        for (position, session) in sessions.iter().enumerate() {
            if session.start_time >= session.end_time {
                continue;
            }
            by_room
                .entry(session.room.clone())
                .or_default()
                .push(Interval {
                    start: session.start_time,
                    end: session.end_time,
                    position,
                });
        }

        for intervals in by_room.values_mut() {
            intervals.sort_by_key(|i| (i.start, i.position));
        }

        OccupancyIndex { by_room }
    }

    /// Position (in the source list) of the session covering `time` in `room`.
    pub fn lookup(&self, room: &str, time: TimeOfDay) -> Option<usize> {
        let intervals = self.by_room.get(room)?;

        // Only intervals starting at or before `time` can cover it.
        let candidates = intervals.partition_point(|i| i.start <= time);

        intervals[..candidates]
            .iter()
            .filter(|i| time < i.end)
            .map(|i| i.position)
            .min()
    }

    pub fn is_occupied(&self, room: &str, time: TimeOfDay) -> bool {
        self.lookup(room, time).is_some()
    }
}
