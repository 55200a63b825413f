//! Pointer down handling - selection, drag start, marquee start.
//!
//! A press on empty space inside the label starts a marquee; outside the
//! label it is only a click.
//!
//! ## Performance Notes
//!
//! Pointer down hit-tests through the R-tree spatial index, which is only
//! rebuilt when item positions changed since the last press.

use super::events::{Modifiers, PointerButton};
use super::state::DragSession;
use crate::engine::{CanvasEffect, CanvasEngine, CanvasView};
use crate::geometry::{Point, Rect};
use crate::profile_scope;
use crate::types::ItemId;
use std::collections::HashMap;
use tracing::debug;

impl CanvasEngine {
    pub(crate) fn handle_pointer_down(
        &mut self,
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
        view: &CanvasView<'_>,
    ) -> Vec<CanvasEffect> {
        profile_scope!("handle_pointer_down");

        if button != PointerButton::Primary {
            return Vec::new();
        }

        let pointer = self.to_canvas(position);
        match self.item_at(position, view) {
            Some(id) => self.press_item(id, pointer, modifiers, view),
            None => self.press_canvas(pointer, view),
        }
    }

    fn press_item(
        &mut self,
        id: ItemId,
        pointer: Point,
        modifiers: Modifiers,
        view: &CanvasView<'_>,
    ) -> Vec<CanvasEffect> {
        // The inline editor owns presses on its own item
        if self.input_state.editing_item_id() == Some(&id) {
            return Vec::new();
        }

        if modifiers.is_multi_select() {
            let mut selection = view.selection.clone();
            selection.toggle(id);
            return vec![CanvasEffect::SelectionChanged(selection.to_vec())];
        }

        let mut effects = self.commit_edit(view);

        let moving_ids = if view.selection.contains(&id) {
            view.selection.to_vec()
        } else {
            effects.push(CanvasEffect::SelectionChanged(vec![id.clone()]));
            vec![id.clone()]
        };

        let initial_positions: HashMap<ItemId, Point> = moving_ids
            .iter()
            .filter_map(|moving| view.item(moving).map(|item| (moving.clone(), item.position())))
            .collect();

        debug!(
            anchor = %id,
            moving = moving_ids.len(),
            "Drag started"
        );

        self.guides.clear();
        self.input_state.start_dragging(DragSession {
            anchor_id: id,
            moving_ids,
            anchor_pointer_start: pointer,
            initial_positions,
        });

        effects
    }

    fn press_canvas(&mut self, pointer: Point, view: &CanvasView<'_>) -> Vec<CanvasEffect> {
        let mut effects = self.commit_edit(view);

        effects.push(CanvasEffect::CanvasClicked);
        if !view.selection.is_empty() {
            effects.push(CanvasEffect::SelectionChanged(Vec::new()));
        }

        self.guides.clear();

        // Only the label surface starts a marquee
        let (width, height) = view.size.to_canvas();
        if !Rect::new(0.0, 0.0, width, height).contains(pointer) {
            debug!(x = pointer.x, y = pointer.y, "Press outside the label");
            return effects;
        }

        debug!(x = pointer.x, y = pointer.y, "Marquee started");
        self.input_state.start_marquee(pointer);

        effects
    }
}
