//! Submitting a session: clear the grid, then persist in the background.
//!
//! The two steps are independent. The grid's selection and form are reset
//! as soon as the user submits; the store call runs afterwards and a failure
//! is only reported through a `Notifier`. Nothing is rolled back.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{error, warn};

use crate::grid::TimelineGrid;
use crate::session::{NewSession, Session};
use crate::store::SessionStore;

/// Side channel for failures that happen after the UI has moved on.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Reports through the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        warn!("{message}");
    }
}

impl Notifier for UnboundedSender<String> {
    fn notify(&self, message: &str) {
        if self.send(message.to_string()).is_err() {
            warn!(message, "notification dropped, receiver closed");
        }
    }
}

/// Create the session, reporting a failure instead of returning it.
pub async fn persist_session<S, N>(store: &S, new: NewSession, notifier: &N) -> Option<Session>
where
    S: SessionStore,
    N: Notifier,
{
    match store.create_session(new).await {
        Ok(session) => Some(session),
        Err(e) => {
            error!(error = %e, "error adding timeline session");
            notifier.notify(&format!("could not add session: {e}"));
            None
        }
    }
}

/// `persist_session` on a tokio task that outlives the caller.
pub fn spawn_persist_session<S, N>(
    store: S,
    new: NewSession,
    notifier: N,
) -> JoinHandle<Option<Session>>
where
    S: SessionStore + 'static,
    N: Notifier + 'static,
{
    tokio::spawn(async move { persist_session(&store, new, &notifier).await })
}

/// Submit the grid's pending selection and start persisting it.
///
/// Returns `None` when there was nothing to submit. The grid is already
/// reset by the time this returns, whatever the store call later does.
pub fn submit_session<S, N>(
    grid: &mut TimelineGrid,
    store: S,
    notifier: N,
) -> Option<JoinHandle<Option<Session>>>
where
    S: SessionStore + 'static,
    N: Notifier + 'static,
{
    let new = grid.submit()?;
    Some(spawn_persist_session(store, new, notifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::session::SessionType;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use tokio::sync::mpsc;

    fn grid_with_pending_selection() -> TimelineGrid {
        let mut grid = TimelineGrid::new("Ada");
        grid.set_event(Some(Event {
            id: "e1".to_string(),
            title: "Caesar".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            start_hour: "18:00".parse().unwrap(),
            end_hour: "21:00".parse().unwrap(),
        }));
        grid.pointer_down("R1", 0);
        grid.pointer_up();
        grid.form_mut().name = "Pattern matching".to_string();
        grid.form_mut().session_type = SessionType::Feedback;
        grid
    }

    #[tokio::test]
    async fn successful_submit_persists_session() {
        let store = MemoryStore::new();
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let mut grid = grid_with_pending_selection();

        let handle = submit_session(&mut grid, store.clone(), tx).unwrap();
        assert!(grid.selection().is_none());

        let session = handle.await.unwrap().unwrap();
        assert_eq!(session.name, "Pattern matching");
        assert_eq!(store.list_by_event("e1").await.unwrap().len(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn failed_submit_notifies_without_restoring_form() {
        let store = MemoryStore::new();
        store.reject_creates(true);
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let mut grid = grid_with_pending_selection();

        let handle = submit_session(&mut grid, store.clone(), tx).unwrap();
        assert!(handle.await.unwrap().is_none());

        let message = rx.recv().await.unwrap();
        assert!(message.starts_with("could not add session"));
        assert!(grid.selection().is_none());
        assert!(grid.form().name.is_empty());
        assert!(store.list_by_event("e1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn nothing_to_submit_spawns_nothing() {
        let mut grid = TimelineGrid::new("Ada");
        assert!(submit_session(&mut grid, MemoryStore::new(), LogNotifier).is_none());
    }
}
