//! Input state machine - one explicit session at a time.
//!
//! Drag, marquee and inline-edit sessions are variants of a single enum, so
//! two of them can never be open at once. Starting a session replaces
//! whatever was there; the engine force-commits an open edit first.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging         (primary press on an item, no modifier)
//! Idle -> Marquee          (primary press on empty canvas)
//! Idle -> Editing          (double-click on a text item)
//! Editing -> Dragging      (press on another item; edit committed first)
//! Editing -> Marquee       (press on empty canvas; edit committed first)
//!
//! Dragging -> Idle         (pointer up / pointer capture lost)
//! Marquee -> Idle          (pointer up / pointer capture lost)
//! Editing -> Idle          (Enter, Escape, blur)
//! ```

use crate::geometry::{Point, Rect};
use crate::types::ItemId;
use std::collections::HashMap;

/// Transient state of an item drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Item under the pointer at drag start; drives snapping
    pub anchor_id: ItemId,
    /// Snapshot of the selection that moves together
    pub moving_ids: Vec<ItemId>,
    /// Pointer position (canvas units) at drag start
    pub anchor_pointer_start: Point,
    /// Position of each moving item at drag start
    pub initial_positions: HashMap<ItemId, Point>,
}

/// Transient state of a rubber-band selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeSession {
    pub start: Point,
    /// Normalized rectangle between start and the current pointer
    pub rect: Rect,
}

impl MarqueeSession {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            rect: Rect::new(start.x, start.y, 0.0, 0.0),
        }
    }

    pub fn update(&mut self, current: Point) {
        self.rect = Rect::from_corners(self.start, current);
    }
}

/// Inline text edit of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub item_id: ItemId,
    pub draft: String,
}

/// Unified input state for canvas interactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active session
    #[default]
    Idle,

    /// Dragging one or more items
    Dragging(DragSession),

    /// Marquee/box selection
    Marquee(MarqueeSession),

    /// Editing a text item in place
    Editing(EditSession),
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently dragging items
    pub fn is_dragging_items(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns true if currently marquee selecting
    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::Marquee(_))
    }

    /// Returns true if a text item is being edited
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Get the anchor item of the drag, if dragging
    pub fn dragged_item_id(&self) -> Option<&ItemId> {
        match self {
            Self::Dragging(session) => Some(&session.anchor_id),
            _ => None,
        }
    }

    /// Get the item being edited, if editing
    pub fn editing_item_id(&self) -> Option<&ItemId> {
        match self {
            Self::Editing(session) => Some(&session.item_id),
            _ => None,
        }
    }

    /// Get the edit session, if editing
    pub fn edit_session(&self) -> Option<&EditSession> {
        match self {
            Self::Editing(session) => Some(session),
            _ => None,
        }
    }

    /// Get the marquee rectangle, if marquee selecting
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Self::Marquee(session) => Some(session.rect),
            _ => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start dragging items
    pub fn start_dragging(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// Start marquee selection
    pub fn start_marquee(&mut self, start: Point) {
        *self = Self::Marquee(MarqueeSession::new(start));
    }

    /// Update marquee current position
    pub fn set_marquee_current(&mut self, current: Point) {
        if let Self::Marquee(session) = self {
            session.update(current);
        }
    }

    /// Start editing `item_id` with `draft` as the initial text
    pub fn start_editing(&mut self, item_id: ItemId, draft: String) {
        *self = Self::Editing(EditSession { item_id, draft });
    }

    /// Replace the edit draft
    pub fn set_draft(&mut self, text: String) {
        if let Self::Editing(session) = self {
            session.draft = text;
        }
    }

    /// Close the edit session and hand it back, leaving other states alone
    pub fn take_edit(&mut self) -> Option<EditSession> {
        if !self.is_editing() {
            return None;
        }
        match std::mem::take(self) {
            Self::Editing(session) => Some(session),
            _ => None,
        }
    }

    /// Close the marquee session and hand it back
    pub fn take_marquee(&mut self) -> Option<MarqueeSession> {
        match *self {
            Self::Marquee(session) => {
                self.reset();
                Some(session)
            }
            _ => None,
        }
    }
}
