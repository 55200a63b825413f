//! Keyboard shortcuts for item operations.

use super::events::{Key, Modifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Delete / Backspace
    DeleteSelection,
    /// Ctrl/Cmd + D
    DuplicateSelection,
    /// Ctrl/Cmd + A
    SelectAll,
}

impl Shortcut {
    /// Map a key press to a shortcut. Nothing fires while a text input has
    /// focus, so typing never deletes or duplicates items.
    pub fn resolve(key: &Key, modifiers: &Modifiers, text_input_focused: bool) -> Option<Self> {
        if text_input_focused {
            return None;
        }
        match key {
            Key::Delete | Key::Backspace => Some(Self::DeleteSelection),
            Key::Character(c) if modifiers.is_platform() => match c.to_ascii_lowercase() {
                'd' => Some(Self::DuplicateSelection),
                'a' => Some(Self::SelectAll),
                _ => None,
            },
            _ => None,
        }
    }
}
