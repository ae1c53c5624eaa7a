//! Drag-to-select gesture over the timeline grid.
//!
//! `Idle -> Selecting -> PendingConfirmation -> Idle`. A selection never
//! spans rooms and is normalized (start index <= end index) on release.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::slots::TimeSlot;

/// Room and slot range of an in-progress or pending selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub room: String,
    pub start_slot: TimeSlot,
    pub end_slot: TimeSlot,
}

impl Selection {
    pub fn single(room: &str, slot: TimeSlot) -> Self {
        Selection {
            room: room.to_string(),
            start_slot: slot,
            end_slot: slot,
        }
    }

    /// Same selection with `start_slot.index <= end_slot.index`.
    pub fn normalized(&self) -> Self {
        let (start_slot, end_slot) = if self.start_slot.index <= self.end_slot.index {
            (self.start_slot, self.end_slot)
        } else {
            (self.end_slot, self.start_slot)
        };

        Selection {
            room: self.room.clone(),
            start_slot,
            end_slot,
        }
    }

    /// Whether `(room, index)` falls inside the selected range (inclusive).
    pub fn contains(&self, room: &str, index: usize) -> bool {
        if self.room != room {
            return false;
        }
        let range = self.normalized();
        range.start_slot.index <= index && index <= range.end_slot.index
    }

    /// Number of slots covered.
    pub fn slot_count(&self) -> usize {
        self.start_slot.index.abs_diff(self.end_slot.index) + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting(Selection),
    PendingConfirmation(Selection),
}

impl SelectionState {
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Selecting(s) | SelectionState::PendingConfirmation(s) => Some(s),
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, SelectionState::Selecting(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SelectionState::PendingConfirmation(_))
    }

    /// Pointer-down on a free slot. Only starts a selection from `Idle`.
    ///
    /// Returns true when a new selection was started.
    pub fn press(&mut self, room: &str, slot: TimeSlot) -> bool {
        if !matches!(self, SelectionState::Idle) {
            debug!(room, index = slot.index, "press ignored, selection already active");
            return false;
        }
        debug!(room, index = slot.index, "selection started");
        *self = SelectionState::Selecting(Selection::single(room, slot));
        true
    }

    /// Pointer-enter while dragging: moves the end slot within the same room.
    pub fn hover(&mut self, room: &str, slot: TimeSlot) {
        if let SelectionState::Selecting(selection) = self {
            if selection.room == room {
                selection.end_slot = slot;
            }
        }
    }

    /// Pointer-up: normalize and wait for the creation form.
    ///
    /// Returns the normalized selection when one was being dragged.
    pub fn release(&mut self) -> Option<&Selection> {
        let SelectionState::Selecting(selection) = self else {
            return None;
        };
        let normalized = selection.normalized();
        debug!(
            room = %normalized.room,
            start = normalized.start_slot.index,
            end = normalized.end_slot.index,
            "selection pending confirmation"
        );
        *self = SelectionState::PendingConfirmation(normalized);
        self.selection()
    }

    pub fn clear(&mut self) {
        *self = SelectionState::Idle;
    }
}
