//! The timeline grid of one event: rooms × half-hour slots.
//!
//! `TimelineGrid` owns its inputs (event, sessions, rooms) and the values
//! derived from them. Derived values are rebuilt only when an input is
//! replaced, never patched in place.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::colors::{self, Color, ColorMap, Hue};
use crate::error::CaesarResult;
use crate::event::Event;
use crate::occupancy::OccupancyIndex;
use crate::room::{self, Room};
use crate::selection::{Selection, SelectionState};
use crate::session::{NewSession, Session, SessionType};
use crate::slots::{self, TimeSlot};
use crate::store::{EventStore, RoomStore, SessionStore};

/// Fields of the session creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub name: String,
    pub abstract_text: String,
    pub session_type: SessionType,
}

/// What a cell of the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState<'a> {
    Occupied(&'a Session),
    Selected,
    Empty,
}

/// Outcome of a pointer-down on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown {
    /// The cell belongs to a session; its details are now shown.
    ShowDetails,
    /// A new selection was started on the cell.
    Started,
    /// Nothing happened (unknown slot, or a selection is already active).
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct TimelineGrid {
    presenter: String,

    event: Option<Event>,
    sessions: Vec<Session>,
    rooms: Vec<Room>,

    slots: Vec<TimeSlot>,
    occupancy: OccupancyIndex,
    colors: ColorMap,

    selection: SelectionState,
    form: SessionForm,
    selected_session: Option<Session>,
}

impl TimelineGrid {
    /// An empty grid acting on behalf of `presenter`.
    pub fn new(presenter: impl Into<String>) -> Self {
        TimelineGrid {
            presenter: presenter.into(),
            ..Default::default()
        }
    }

    /// Resolve the event on `date` and load its sessions and the rooms.
    ///
    /// A date without an event yields a grid with no event and no slots.
    pub async fn load<S>(store: &S, date: NaiveDate, presenter: &str) -> CaesarResult<Self>
    where
        S: EventStore + SessionStore + RoomStore,
    {
        let mut grid = TimelineGrid::new(presenter);
        grid.set_rooms(store.list_rooms().await?);

        let Some(event) = store.get_by_date(date).await? else {
            debug!(%date, "no event on date");
            return Ok(grid);
        };

        let sessions = store.list_by_event(&event.id).await?;
        info!(event = %event.id, sessions = sessions.len(), "loaded timeline");
        grid.set_event(Some(event));
        grid.set_sessions(sessions);
        Ok(grid)
    }

    // INPUTS:

    /// Replace the event. Drops the sessions and any interaction state,
    /// since both belong to the previous event.
    pub fn set_event(&mut self, event: Option<Event>) {
        self.slots = slots::slots_for(event.as_ref());
        self.event = event;
        self.set_sessions(Vec::new());
        self.cancel();
        self.selected_session = None;
    }

    pub fn set_sessions(&mut self, sessions: Vec<Session>) {
        self.occupancy = OccupancyIndex::build(&sessions);
        self.colors = ColorMap::build(&sessions);
        self.sessions = sessions;
    }

    /// Append a freshly persisted session.
    pub fn add_session(&mut self, session: Session) {
        let mut sessions = std::mem::take(&mut self.sessions);
        sessions.push(session);
        self.set_sessions(sessions);
    }

    pub fn set_rooms(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
    }

    // READS:

    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn presenter(&self) -> &str {
        &self.presenter
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<TimeSlot> {
        self.slots.get(index).copied()
    }

    pub fn room_name<'a>(&'a self, room_id: &'a str) -> &'a str {
        room::room_name(&self.rooms, room_id)
    }

    /// The session occupying `(room, index)`, if any.
    pub fn session_at(&self, room: &str, index: usize) -> Option<&Session> {
        let slot = self.slot(index)?;
        self.occupancy
            .lookup(room, slot.time)
            .map(|position| &self.sessions[position])
    }

    pub fn is_slot_selected(&self, room: &str, index: usize) -> bool {
        self.selection
            .selection()
            .is_some_and(|s| s.contains(room, index))
    }

    /// Occupied beats selected beats empty.
    pub fn slot_state(&self, room: &str, index: usize) -> SlotState<'_> {
        if let Some(session) = self.session_at(room, index) {
            SlotState::Occupied(session)
        } else if self.is_slot_selected(room, index) {
            SlotState::Selected
        } else {
            SlotState::Empty
        }
    }

    pub fn session_color_index(&self, session_id: &str) -> usize {
        self.colors.index_of(session_id)
    }

    pub fn session_color(&self, session_id: &str) -> Color {
        self.colors.color_of(session_id)
    }

    /// Row color of a room; unknown rooms use the first hue.
    pub fn room_hue(&self, room_id: &str) -> Hue {
        let row = self
            .rooms
            .iter()
            .position(|r| r.id == room_id)
            .unwrap_or(0);
        colors::room_hue(row)
    }

    // INTERACTION:

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.selection()
    }

    pub fn is_selecting(&self) -> bool {
        self.selection.is_selecting()
    }

    /// The creation form is shown while a selection awaits confirmation.
    pub fn show_form(&self) -> bool {
        self.selection.is_pending()
    }

    pub fn form(&self) -> &SessionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SessionForm {
        &mut self.form
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.selected_session.as_ref()
    }

    pub fn pointer_down(&mut self, room: &str, index: usize) -> PointerDown {
        if let Some(session) = self.session_at(room, index) {
            debug!(session = %session.id, "showing session details");
            self.selected_session = Some(session.clone());
            return PointerDown::ShowDetails;
        }

        let Some(slot) = self.slot(index) else {
            return PointerDown::Ignored;
        };

        if self.selection.press(room, slot) {
            PointerDown::Started
        } else {
            PointerDown::Ignored
        }
    }

    pub fn pointer_enter(&mut self, room: &str, index: usize) {
        if let Some(slot) = self.slot(index) {
            self.selection.hover(room, slot);
        }
    }

    /// Returns true when the creation form should now be shown.
    pub fn pointer_up(&mut self) -> bool {
        self.selection.release().is_some()
    }

    pub fn close_session_details(&mut self) {
        self.selected_session = None;
    }

    /// Drop the selection and reset the form to its defaults.
    pub fn cancel(&mut self) {
        self.selection.clear();
        self.form = SessionForm::default();
    }

    /// Confirm the pending selection.
    ///
    /// Clears the selection and form, and returns the session to create.
    /// The session ends one slot after the last selected slot. Without a
    /// pending selection or an event, nothing is submitted or cleared.
    pub fn submit(&mut self) -> Option<NewSession> {
        let event_id = self.event.as_ref()?.id.clone();
        let SelectionState::PendingConfirmation(selection) = &self.selection else {
            return None;
        };

        let Some(end_time) = selection.end_slot.time.next_slot() else {
            debug!(end = %selection.end_slot.time, "selection ends past midnight, not submitting");
            return None;
        };

        let new = NewSession {
            event_id,
            room: selection.room.clone(),
            start_time: selection.start_slot.time,
            end_time,
            name: self.form.name.clone(),
            abstract_text: self.form.abstract_text.clone(),
            session_type: self.form.session_type,
            presenter: self.presenter.clone(),
        };

        self.cancel();
        Some(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> Event {
        Event {
            id: "e1".to_string(),
            title: "Caesar".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            start_hour: "18:00".parse().unwrap(),
            end_hour: "21:00".parse().unwrap(),
        }
    }

    fn session(id: &str, room: &str, start: &str, end: &str) -> Session {
        Session {
            id: id.to_string(),
            event_id: "e1".to_string(),
            room: room.to_string(),
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            name: id.to_string(),
            abstract_text: String::new(),
            session_type: SessionType::Presentation,
            presenter: "Grace".to_string(),
        }
    }

    fn grid() -> TimelineGrid {
        let mut grid = TimelineGrid::new("Ada");
        grid.set_event(Some(event()));
        grid.set_sessions(vec![session("s1", "R1", "18:00", "19:00")]);
        grid
    }

    #[test]
    fn slot_state_prefers_sessions() {
        let mut grid = grid();
        assert!(matches!(grid.slot_state("R1", 0), SlotState::Occupied(_)));
        assert_eq!(grid.slot_state("R1", 2), SlotState::Empty);

        grid.pointer_down("R1", 2);
        assert_eq!(grid.slot_state("R1", 2), SlotState::Selected);
    }

    #[test]
    fn pointer_down_on_session_shows_details_only() {
        let mut grid = grid();
        assert_eq!(grid.pointer_down("R1", 1), PointerDown::ShowDetails);
        assert_eq!(grid.selected_session().unwrap().id, "s1");
        assert!(grid.selection().is_none());

        grid.close_session_details();
        assert!(grid.selected_session().is_none());
    }

    #[test]
    fn pointer_down_outside_slots_is_ignored() {
        let mut grid = grid();
        assert_eq!(grid.pointer_down("R1", 99), PointerDown::Ignored);
        assert!(grid.selection().is_none());
    }

    #[test]
    fn submit_clears_form_and_selection() {
        let mut grid = grid();
        grid.pointer_down("R2", 2);
        grid.pointer_up();
        grid.form_mut().name = "Traits".to_string();
        grid.form_mut().session_type = SessionType::Workshop;

        let new = grid.submit().unwrap();
        assert_eq!(new.name, "Traits");
        assert_eq!(new.session_type, SessionType::Workshop);
        assert_eq!(new.presenter, "Ada");
        assert_eq!(new.start_time.to_string(), "19:00");
        assert_eq!(new.end_time.to_string(), "19:30");

        assert!(grid.selection().is_none());
        assert_eq!(grid.form(), &SessionForm::default());
    }

    #[test]
    fn submit_without_pending_selection_is_skipped() {
        let mut grid = grid();
        assert!(grid.submit().is_none());

        grid.pointer_down("R2", 2);
        assert!(grid.submit().is_none());
        assert!(grid.is_selecting());
    }

    #[test]
    fn submit_without_event_is_skipped() {
        let mut grid = TimelineGrid::new("Ada");
        grid.set_event(None);
        assert!(grid.slots().is_empty());
        assert_eq!(grid.pointer_down("R1", 0), PointerDown::Ignored);
        assert!(grid.submit().is_none());
    }

    #[test]
    fn cancel_resets_form() {
        let mut grid = grid();
        grid.pointer_down("R2", 0);
        grid.pointer_up();
        grid.form_mut().name = "Draft".to_string();
        grid.cancel();
        assert!(!grid.show_form());
        assert!(grid.form().name.is_empty());
    }

    #[test]
    fn add_session_updates_occupancy_and_colors() {
        let mut grid = grid();
        grid.add_session(session("s2", "R2", "20:00", "21:00"));
        assert_eq!(grid.session_at("R2", 4).unwrap().id, "s2");
        assert_eq!(grid.session_color_index("s2"), 1);
    }

    #[test]
    fn changing_event_drops_sessions_and_selection() {
        let mut grid = grid();
        grid.pointer_down("R2", 3);
        grid.set_event(None);
        assert!(grid.sessions().is_empty());
        assert!(grid.selection().is_none());
    }

    #[test]
    fn room_hue_follows_row_order() {
        let mut grid = grid();
        grid.set_rooms(vec![
            Room { id: "R1".to_string(), name: "Aula".to_string(), capacity: 40 },
            Room { id: "R2".to_string(), name: "Lab".to_string(), capacity: 12 },
        ]);
        assert_eq!(grid.room_hue("R2"), Hue::Emerald);
        assert_eq!(grid.room_name("R2"), "Lab");
        assert_eq!(grid.room_name("R9"), "R9");
    }

    #[test]
    fn last_slot_before_midnight_ends_at_midnight() {
        let mut grid = TimelineGrid::new("Ada");
        grid.set_event(Some(Event {
            start_hour: "23:00".parse().unwrap(),
            end_hour: "24:00".parse().unwrap(),
            ..event()
        }));
        let labels: Vec<String> = grid.slots().iter().map(|s| s.time.to_string()).collect();
        assert_eq!(labels, ["23:00", "23:30", "24:00"]);

        grid.pointer_down("R1", 1);
        grid.pointer_up();
        let new = grid.submit().unwrap();
        assert_eq!(new.start_time.to_string(), "23:30");
        assert_eq!(new.end_time.to_string(), "24:00");
    }

    #[test]
    fn selection_ending_on_midnight_slot_is_not_submitted() {
        let mut grid = TimelineGrid::new("Ada");
        grid.set_event(Some(Event {
            start_hour: "23:00".parse().unwrap(),
            end_hour: "24:00".parse().unwrap(),
            ..event()
        }));
        grid.pointer_down("R1", 1);
        grid.pointer_enter("R1", 2);
        grid.pointer_up();
        grid.form_mut().name = "Late".to_string();

        assert!(grid.submit().is_none());
        assert!(grid.show_form());
        assert_eq!(grid.form().name, "Late");
        let selection = grid.selection().unwrap();
        assert_eq!((selection.start_slot.index, selection.end_slot.index), (1, 2));
    }
}
