//! Wall-clock times on the half-hour grid.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{CaesarError, CaesarResult};

/// Length of one timeline slot, in minutes.
pub const SLOT_MINUTES: u16 = 30;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day stored as minutes since midnight.
///
/// Valid values are `00:00` through `24:00`. `24:00` only exists as an
/// exclusive end boundary, e.g. a session running until midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(TimeOfDay(minutes))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        Self::from_minutes(hour.checked_mul(60)?.checked_add(minute)?)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// True for `HH:00` and `HH:30`.
    pub fn is_slot_aligned(self) -> bool {
        self.0 % SLOT_MINUTES == 0
    }

    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        Self::from_minutes(self.0.checked_add(minutes)?)
    }

    /// The label one slot later, e.g. `19:30` -> `20:00`.
    pub fn next_slot(self) -> Option<Self> {
        self.checked_add_minutes(SLOT_MINUTES)
    }
}

impl FromStr for TimeOfDay {
    type Err = CaesarError;

    fn from_str(s: &str) -> CaesarResult<Self> {
        let s = s.trim();
        if s == "24:00" {
            return Ok(Self::END_OF_DAY);
        }

        let time = NaiveTime::parse_from_str(s, "%H:%M")
            .map_err(|_| CaesarError::InvalidTime(s.to_string()))?;

        // Both fit in u16: hour < 24, minute < 60
        Self::from_hm(time.hour() as u16, time.minute() as u16)
            .ok_or_else(|| CaesarError::InvalidTime(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = CaesarError;

    fn try_from(value: String) -> CaesarResult<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
