//! In-memory store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{CaesarError, CaesarResult};
use crate::event::{Event, EventDraft};
use crate::room::Room;
use crate::session::{NewSession, Session};
use crate::store::{EventStore, RoomStore, SessionStore, event_from_draft, new_id};

#[derive(Default)]
struct Records {
    events: Vec<Event>,
    sessions: Vec<Session>,
    rooms: Vec<Room>,
}

/// Store that keeps everything in memory. Clones share the same records.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Records>>,
    reject_creates: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent create fail with a store error.
    pub fn reject_creates(&self, reject: bool) {
        self.reject_creates.store(reject, Ordering::SeqCst);
    }

    pub fn insert_event(&self, event: Event) -> CaesarResult<()> {
        self.lock()?.events.push(event);
        Ok(())
    }

    pub fn insert_session(&self, session: Session) -> CaesarResult<()> {
        self.lock()?.sessions.push(session);
        Ok(())
    }

    pub fn insert_room(&self, room: Room) -> CaesarResult<()> {
        self.lock()?.rooms.push(room);
        Ok(())
    }

    fn lock(&self) -> CaesarResult<MutexGuard<'_, Records>> {
        self.records
            .lock()
            .map_err(|_| CaesarError::Store("memory store lock poisoned".into()))
    }

    fn check_creates_allowed(&self) -> CaesarResult<()> {
        if self.reject_creates.load(Ordering::SeqCst) {
            return Err(CaesarError::Store("create rejected".into()));
        }
        Ok(())
    }
}

impl EventStore for MemoryStore {
    async fn list_events(&self) -> CaesarResult<Vec<Event>> {
        Ok(self.lock()?.events.clone())
    }

    async fn create_event(&self, draft: EventDraft) -> CaesarResult<Event> {
        self.check_creates_allowed()?;
        let event = event_from_draft(draft);
        self.lock()?.events.push(event.clone());
        Ok(event)
    }

    async fn delete_event(&self, id: &str) -> CaesarResult<()> {
        self.lock()?.events.retain(|e| e.id != id);
        Ok(())
    }
}

impl SessionStore for MemoryStore {
    async fn list_by_event(&self, event_id: &str) -> CaesarResult<Vec<Session>> {
        Ok(self
            .lock()?
            .sessions
            .iter()
            .filter(|s| s.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn create_session(&self, new: NewSession) -> CaesarResult<Session> {
        self.check_creates_allowed()?;
        let session = new.into_session(new_id());
        self.lock()?.sessions.push(session.clone());
        Ok(session)
    }
}

impl RoomStore for MemoryStore {
    async fn list_rooms(&self) -> CaesarResult<Vec<Room>> {
        Ok(self.lock()?.rooms.clone())
    }

    async fn create_room(&self, name: &str, capacity: u32) -> CaesarResult<Room> {
        self.check_creates_allowed()?;
        let room = Room {
            id: new_id(),
            name: name.to_string(),
            capacity,
        };
        self.lock()?.rooms.push(room.clone());
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionType;
    use chrono::NaiveDate;

    fn draft(date: (i32, u32, u32)) -> EventDraft {
        EventDraft {
            title: "Caesar".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            start_hour: "18:00".parse().unwrap(),
            end_hour: "21:00".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn get_by_date_returns_first_match() {
        let store = MemoryStore::new();
        let first = store.create_event(draft((2025, 3, 20))).await.unwrap();
        store.create_event(draft((2025, 3, 20))).await.unwrap();

        let found = store
            .get_by_date(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap())
            .await
            .unwrap();
        assert_eq!(found.unwrap().id, first.id);

        let missing = store
            .get_by_date(NaiveDate::from_ymd_opt(2025, 3, 21).unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn sessions_are_filtered_by_event() {
        let store = MemoryStore::new();
        for event_id in ["e1", "e2", "e1"] {
            store
                .create_session(NewSession {
                    event_id: event_id.to_string(),
                    room: "R1".to_string(),
                    start_time: "18:00".parse().unwrap(),
                    end_time: "18:30".parse().unwrap(),
                    name: "Talk".to_string(),
                    abstract_text: String::new(),
                    session_type: SessionType::Workshop,
                    presenter: "Ada".to_string(),
                })
                .await
                .unwrap();
        }

        assert_eq!(store.list_by_event("e1").await.unwrap().len(), 2);
        assert_eq!(store.list_by_event("e3").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn rejected_creates_store_nothing() {
        let store = MemoryStore::new();
        store.reject_creates(true);
        assert!(store.create_event(draft((2025, 3, 20))).await.is_err());
        assert!(store.list_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_event_removes_it() {
        let store = MemoryStore::new();
        let event = store.create_event(draft((2025, 3, 20))).await.unwrap();
        store.delete_event(&event.id).await.unwrap();
        assert!(store.list_events().await.unwrap().is_empty());
    }
}
