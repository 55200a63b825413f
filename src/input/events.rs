//! Host events consumed by the canvas engine.
//!
//! Pointer positions are in device pixels; the engine converts them with
//! the current [`Viewport`](super::coords::Viewport). Events deserialize
//! from JSON so sessions can be recorded and replayed.

use crate::geometry::Point;
use crate::types::ItemId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Modifier keys held during an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        meta: false,
        alt: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }

    /// Shift, ctrl or meta: pressing an item toggles it instead of dragging
    pub fn is_multi_select(&self) -> bool {
        self.shift || self.ctrl || self.meta
    }

    /// Ctrl or meta, the shortcut modifier on either platform
    pub fn is_platform(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Enter,
    Escape,
    Delete,
    Backspace,
    Character(char),
}

/// One input event from the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanvasEvent {
    PointerDown {
        position: Point,
        #[serde(default)]
        button: PointerButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        position: Point,
    },
    PointerUp {
        position: Point,
    },
    /// The host lost pointer capture (window blur, capture stolen)
    PointerCaptureLost,
    DoubleClick {
        position: Point,
    },
    /// Delete button on a selected item's frame
    DeleteHandle {
        id: ItemId,
    },
    /// Full replacement text of the inline editor
    TextInput {
        text: String,
    },
    Key {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
        /// Focus is in a text input or textarea outside the canvas
        #[serde(default)]
        text_input_focused: bool,
    },
    /// The inline editor lost focus
    Blur,
}
