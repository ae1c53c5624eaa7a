//! Half-hour slot derivation for an event's hour range.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::time_of_day::{SLOT_MINUTES, TimeOfDay};

/// One cell column of the timeline: its position and its start label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub index: usize,
    pub time: TimeOfDay,
}

/// Slot labels from `start` through `end` inclusive, every 30 minutes.
///
/// Returns an empty list when `start > end`.
pub fn slot_times(start: TimeOfDay, end: TimeOfDay) -> Vec<TimeOfDay> {
    (start.minutes()..=end.minutes())
        .step_by(SLOT_MINUTES as usize)
        .filter_map(TimeOfDay::from_minutes)
        .collect()
}

/// Slots for an event, or none when no event is resolved.
pub fn slots_for(event: Option<&Event>) -> Vec<TimeSlot> {
    let Some(event) = event else {
        return Vec::new();
    };

    slot_times(event.start_hour, event.end_hour)
        .into_iter()
        .enumerate()
        .map(|(index, time)| TimeSlot { index, time })
        .collect()
}
