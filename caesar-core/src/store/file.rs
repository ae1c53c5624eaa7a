//! TOML-file store in the caesar data directory.
//!
//! Layout:
//! ```text
//! <data_dir>/events.toml
//! <data_dir>/sessions.toml
//! <data_dir>/rooms.toml
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{CaesarError, CaesarResult};
use crate::event::{Event, EventDraft};
use crate::room::Room;
use crate::session::{NewSession, Session};
use crate::store::{EventStore, RoomStore, SessionStore, event_from_draft, new_id};

const EVENTS_FILE: &str = "events.toml";
const SESSIONS_FILE: &str = "sessions.toml";
const ROOMS_FILE: &str = "rooms.toml";

#[derive(Default, Serialize, Deserialize)]
struct EventsFile {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Default, Serialize, Deserialize)]
struct SessionsFile {
    #[serde(default)]
    sessions: Vec<Session>,
}

#[derive(Default, Serialize, Deserialize)]
struct RoomsFile {
    #[serde(default)]
    rooms: Vec<Room>,
}

/// Store backed by TOML files. Clones share the same write lock.
#[derive(Clone)]
pub struct FileStore {
    dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore {
            dir: dir.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read<T: DeserializeOwned + Default>(&self, file: &str) -> CaesarResult<T> {
        let path = self.dir.join(file);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|e| {
            CaesarError::Serialization(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    async fn write<T: Serialize>(&self, file: &str, value: &T) -> CaesarResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(file);
        let temp = self.dir.join(format!("{file}.tmp"));

        let content =
            toml::to_string_pretty(value).map_err(|e| CaesarError::Serialization(e.to_string()))?;

        tokio::fs::write(&temp, content).await?;
        tokio::fs::rename(&temp, &path).await?;
        debug!(path = %path.display(), "wrote store file");
        Ok(())
    }
}

impl EventStore for FileStore {
    async fn list_events(&self) -> CaesarResult<Vec<Event>> {
        let file: EventsFile = self.read(EVENTS_FILE).await?;
        Ok(file.events)
    }

    async fn create_event(&self, draft: EventDraft) -> CaesarResult<Event> {
        let _guard = self.write_lock.lock().await;

        let mut file: EventsFile = self.read(EVENTS_FILE).await?;
        let event = event_from_draft(draft);
        file.events.push(event.clone());
        self.write(EVENTS_FILE, &file).await?;

        info!(id = %event.id, date = %event.date, "created event");
        Ok(event)
    }

    async fn delete_event(&self, id: &str) -> CaesarResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut file: EventsFile = self.read(EVENTS_FILE).await?;
        let before = file.events.len();
        file.events.retain(|e| e.id != id);

        if file.events.len() == before {
            return Err(CaesarError::Store(format!("No event with id '{}'", id)));
        }

        self.write(EVENTS_FILE, &file).await?;
        info!(id, "deleted event");
        Ok(())
    }
}

impl SessionStore for FileStore {
    async fn list_by_event(&self, event_id: &str) -> CaesarResult<Vec<Session>> {
        let file: SessionsFile = self.read(SESSIONS_FILE).await?;
        Ok(file
            .sessions
            .into_iter()
            .filter(|s| s.event_id == event_id)
            .collect())
    }

    async fn create_session(&self, new: NewSession) -> CaesarResult<Session> {
        let _guard = self.write_lock.lock().await;

        let mut file: SessionsFile = self.read(SESSIONS_FILE).await?;
        let session = new.into_session(new_id());
        file.sessions.push(session.clone());
        self.write(SESSIONS_FILE, &file).await?;

        info!(
            id = %session.id,
            room = %session.room,
            start = %session.start_time,
            end = %session.end_time,
            "created session"
        );
        Ok(session)
    }
}

impl RoomStore for FileStore {
    async fn list_rooms(&self) -> CaesarResult<Vec<Room>> {
        let file: RoomsFile = self.read(ROOMS_FILE).await?;
        Ok(file.rooms)
    }

    async fn create_room(&self, name: &str, capacity: u32) -> CaesarResult<Room> {
        let _guard = self.write_lock.lock().await;

        let mut file: RoomsFile = self.read(ROOMS_FILE).await?;
        if file.rooms.iter().any(|r| r.name == name) {
            return Err(CaesarError::Store(format!("Room '{}' already exists", name)));
        }

        let room = Room {
            id: new_id(),
            name: name.to_string(),
            capacity,
        };
        file.rooms.push(room.clone());
        self.write(ROOMS_FILE, &file).await?;

        info!(id = %room.id, name, "created room");
        Ok(room)
    }
}
