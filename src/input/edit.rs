//! Inline text editing and keyboard handling.
//!
//! A double-click on a text item opens an edit session seeded with the
//! item's content. The host forwards the editor's text as `TextInput`
//! events; Enter (without shift) or blur writes the draft back, Escape
//! throws it away.

use super::events::{Key, Modifiers};
use super::shortcuts::Shortcut;
use crate::engine::{CanvasEffect, CanvasEngine, CanvasView};
use crate::geometry::Point;
use crate::types::{ItemChanges, ItemId, ItemUpdate};
use tracing::debug;

impl CanvasEngine {
    pub(crate) fn handle_double_click(
        &mut self,
        position: Point,
        view: &CanvasView<'_>,
    ) -> Vec<CanvasEffect> {
        let Some(id) = self.item_at(position, view) else {
            return Vec::new();
        };
        let Some(item) = view.item(&id) else {
            return Vec::new();
        };
        if !item.is_text() || self.input_state.editing_item_id() == Some(&id) {
            return Vec::new();
        }

        let mut effects = self.commit_edit(view);
        if !(view.selection.len() == 1 && view.selection.contains(&id)) {
            effects.push(CanvasEffect::SelectionChanged(vec![id.clone()]));
        }

        debug!(item = %id, "Edit started");
        // Replaces a pending drag from the first click of the double-click
        self.guides.clear();
        self.input_state.start_editing(id, item.content.clone());
        effects
    }

    pub(crate) fn handle_text_input(&mut self, text: &str) {
        self.input_state.set_draft(text.to_string());
    }

    pub(crate) fn handle_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        text_input_focused: bool,
        view: &CanvasView<'_>,
    ) -> Vec<CanvasEffect> {
        if self.input_state.is_editing() {
            return match key {
                Key::Enter if !modifiers.shift => self.commit_edit(view),
                Key::Escape => {
                    self.discard_edit();
                    Vec::new()
                }
                _ => Vec::new(),
            };
        }

        match Shortcut::resolve(&key, &modifiers, text_input_focused) {
            Some(shortcut) => self.run_shortcut(shortcut, view),
            None => Vec::new(),
        }
    }

    fn run_shortcut(&mut self, shortcut: Shortcut, view: &CanvasView<'_>) -> Vec<CanvasEffect> {
        debug!(?shortcut, "Shortcut");
        match shortcut {
            Shortcut::DeleteSelection if !view.selection.is_empty() => {
                vec![CanvasEffect::DeleteRequested(view.selection.to_vec())]
            }
            Shortcut::DuplicateSelection if !view.selection.is_empty() => {
                vec![CanvasEffect::DuplicateRequested(view.selection.to_vec())]
            }
            Shortcut::SelectAll => vec![CanvasEffect::SelectionChanged(
                view.items.iter().map(|item| item.id.clone()).collect(),
            )],
            _ => Vec::new(),
        }
    }

    pub(crate) fn handle_delete_handle(
        &mut self,
        id: &ItemId,
        view: &CanvasView<'_>,
    ) -> Vec<CanvasEffect> {
        if !view.contains(id) {
            return Vec::new();
        }
        if self.input_state.editing_item_id() == Some(id) {
            self.discard_edit();
        }
        vec![CanvasEffect::DeleteRequested(vec![id.clone()])]
    }

    /// Close any edit session, writing its draft to the item.
    ///
    /// A session whose item no longer exists closes silently.
    pub(crate) fn commit_edit(&mut self, view: &CanvasView<'_>) -> Vec<CanvasEffect> {
        let Some(session) = self.input_state.take_edit() else {
            return Vec::new();
        };
        if !view.contains(&session.item_id) {
            debug!(item = %session.item_id, "Edited item gone, dropping draft");
            return Vec::new();
        }

        debug!(item = %session.item_id, "Edit committed");
        vec![CanvasEffect::ItemsUpdated(vec![ItemUpdate::new(
            session.item_id,
            ItemChanges::content(session.draft),
        )])]
    }

    fn discard_edit(&mut self) {
        if let Some(session) = self.input_state.take_edit() {
            debug!(item = %session.item_id, "Edit discarded");
        }
    }
}
