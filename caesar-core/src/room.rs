//! Rooms: the rows of the timeline grid.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Display name for a room id, falling back to the id itself.
pub fn room_name<'a>(rooms: &'a [Room], room_id: &'a str) -> &'a str {
    rooms
        .iter()
        .find(|r| r.id == room_id)
        .map(|r| r.name.as_str())
        .unwrap_or(room_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_name_falls_back_to_id() {
        let rooms = vec![Room {
            id: "r1".to_string(),
            name: "Aula".to_string(),
            capacity: 40,
        }];
        assert_eq!(room_name(&rooms, "r1"), "Aula");
        assert_eq!(room_name(&rooms, "r9"), "r9");
    }
}
