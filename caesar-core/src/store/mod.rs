//! Persistence seam for events, sessions and rooms.
//!
//! The timeline only ever talks to these traits. `FileStore` keeps records
//! as TOML files in the data directory; `MemoryStore` keeps them in memory.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::future::Future;

use chrono::NaiveDate;

use crate::error::CaesarResult;
use crate::event::{Event, EventDraft};
use crate::room::Room;
use crate::session::{NewSession, Session};

pub trait EventStore: Send + Sync {
    /// All events, in store order.
    fn list_events(&self) -> impl Future<Output = CaesarResult<Vec<Event>>> + Send;

    fn create_event(&self, draft: EventDraft) -> impl Future<Output = CaesarResult<Event>> + Send;

    fn delete_event(&self, id: &str) -> impl Future<Output = CaesarResult<()>> + Send;

    /// First event on `date`, if any.
    fn get_by_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = CaesarResult<Option<Event>>> + Send {
        async move {
            let events = self.list_events().await?;
            Ok(events.into_iter().find(|e| e.date == date))
        }
    }
}

pub trait SessionStore: Send + Sync {
    /// Sessions of one event, in store order.
    fn list_by_event(
        &self,
        event_id: &str,
    ) -> impl Future<Output = CaesarResult<Vec<Session>>> + Send;

    fn create_session(
        &self,
        new: NewSession,
    ) -> impl Future<Output = CaesarResult<Session>> + Send;
}

pub trait RoomStore: Send + Sync {
    fn list_rooms(&self) -> impl Future<Output = CaesarResult<Vec<Room>>> + Send;

    fn create_room(
        &self,
        name: &str,
        capacity: u32,
    ) -> impl Future<Output = CaesarResult<Room>> + Send;
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn event_from_draft(draft: EventDraft) -> Event {
    Event {
        id: new_id(),
        title: draft.title,
        date: draft.date,
        start_hour: draft.start_hour,
        end_hour: draft.end_hour,
    }
}
