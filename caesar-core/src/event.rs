//! Events: a dated occasion with an hour range that contains sessions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CaesarError, CaesarResult};
use crate::time_of_day::TimeOfDay;

pub const DEFAULT_START_HOUR: &str = "18:00";
pub const DEFAULT_END_HOUR: &str = "21:00";

const HALF_HOUR_MESSAGE: &str = "start and end times must be on whole or half hours (:00 or :30)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_hour: TimeOfDay,
    pub end_hour: TimeOfDay,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// The event creation form, as typed by the user.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub start_hour: String,
    pub end_hour: String,
}

/// A validated event awaiting an id from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start_hour: TimeOfDay,
    pub end_hour: TimeOfDay,
}

impl NewEvent {
    /// A blank form: empty title, today's date, default hours.
    pub fn with_defaults(today: NaiveDate) -> Self {
        NewEvent {
            title: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            start_hour: DEFAULT_START_HOUR.to_string(),
            end_hour: DEFAULT_END_HOUR.to_string(),
        }
    }

    /// Check the form and convert it into a draft.
    pub fn validate(&self) -> CaesarResult<EventDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CaesarError::Validation("title is required".into()));
        }

        let date_str = self.date.trim();
        if date_str.is_empty() {
            return Err(CaesarError::Validation("date is required".into()));
        }
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            CaesarError::Validation(format!(
                "Invalid date format '{}'. Expected YYYY-MM-DD",
                date_str
            ))
        })?;

        if !is_whole_or_half_hour(&self.start_hour) || !is_whole_or_half_hour(&self.end_hour) {
            return Err(CaesarError::Validation(HALF_HOUR_MESSAGE.into()));
        }

        let start_hour: TimeOfDay = self.start_hour.parse()?;
        let end_hour: TimeOfDay = self.end_hour.parse()?;

        if start_hour > end_hour {
            return Err(CaesarError::Validation(format!(
                "start hour {} is after end hour {}",
                start_hour, end_hour
            )));
        }

        Ok(EventDraft {
            title: title.to_string(),
            date,
            start_hour,
            end_hour,
        })
    }
}

/// Accepts exactly `HH:00` or `HH:30` with a two-digit hour.
pub fn is_whole_or_half_hour(time: &str) -> bool {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    if !bytes.iter().enumerate().all(|(i, b)| i == 2 || b.is_ascii_digit()) {
        return false;
    }
    matches!(&time[3..], "00" | "30")
}
