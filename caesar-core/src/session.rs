//! Sessions: a named activity occupying a run of slots in one room.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaesarError;
use crate::time_of_day::TimeOfDay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub event_id: String,
    pub room: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub name: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub session_type: SessionType,
    pub presenter: String,
}

impl Session {
    /// Half-open containment: `start <= time < end`.
    pub fn covers(&self, time: TimeOfDay) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Everything the store needs to create a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSession {
    pub event_id: String,
    pub room: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub name: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub session_type: SessionType,
    pub presenter: String,
}

impl NewSession {
    pub fn into_session(self, id: String) -> Session {
        Session {
            id,
            event_id: self.event_id,
            room: self.room,
            start_time: self.start_time,
            end_time: self.end_time,
            name: self.name,
            abstract_text: self.abstract_text,
            session_type: self.session_type,
            presenter: self.presenter,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    #[default]
    Presentation,
    Brainstorm,
    Workshop,
    Feedback,
}

impl SessionType {
    pub const ALL: [SessionType; 4] = [
        SessionType::Presentation,
        SessionType::Brainstorm,
        SessionType::Workshop,
        SessionType::Feedback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SessionType::Presentation => "Presentation",
            SessionType::Brainstorm => "Brainstorm",
            SessionType::Workshop => "Workshop",
            SessionType::Feedback => "Feedback",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionType {
    type Err = CaesarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CaesarError::Validation(format!(
                    "Unknown session type '{}'. Expected one of: Presentation, Brainstorm, Workshop, Feedback",
                    s
                ))
            })
    }
}
