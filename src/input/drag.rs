//! Pointer move handling - item drag with snapping, marquee resize.

use super::state::InputState;
use crate::constants::POINTER_MOVE_BUDGET_MS;
use crate::engine::{CanvasEffect, CanvasEngine, CanvasView};
use crate::geometry::Point;
use crate::profile_scope;
use crate::types::{ItemChanges, ItemUpdate};
use tracing::trace;

impl CanvasEngine {
    pub(crate) fn handle_pointer_move(
        &mut self,
        position: Point,
        view: &CanvasView<'_>,
    ) -> Vec<CanvasEffect> {
        profile_scope!("handle_pointer_move", POINTER_MOVE_BUDGET_MS);

        let pointer = self.to_canvas(position);
        match self.input_state {
            InputState::Dragging(_) => self.drag_tick(pointer, view),
            InputState::Marquee(_) => {
                self.input_state.set_marquee_current(pointer);
                Vec::new()
            }
            InputState::Idle | InputState::Editing(_) => Vec::new(),
        }
    }

    /// Move every item of the drag by the anchor's snapped delta.
    fn drag_tick(&mut self, pointer: Point, view: &CanvasView<'_>) -> Vec<CanvasEffect> {
        let InputState::Dragging(ref session) = self.input_state else {
            return Vec::new();
        };

        let Some(anchor_item) = view.item(&session.anchor_id) else {
            trace!(anchor = %session.anchor_id, "Drag anchor gone, skipping tick");
            return Vec::new();
        };
        let Some(&anchor_initial) = session.initial_positions.get(&session.anchor_id) else {
            return Vec::new();
        };

        let raw = pointer - session.anchor_pointer_start;
        let anchor_rect = self.bounds.resolve(anchor_item).rect;
        let snapped = self.snap.compute_snap(
            anchor_initial + raw,
            anchor_rect.width,
            anchor_rect.height,
            &session.moving_ids,
            view.items,
            &self.bounds,
        );

        // Unsnapped axes keep the raw delta so translation stays exact
        let delta = Point::new(
            if snapped.vertical_guide.is_some() {
                snapped.x - anchor_initial.x
            } else {
                raw.x
            },
            if snapped.horizontal_guide.is_some() {
                snapped.y - anchor_initial.y
            } else {
                raw.y
            },
        );

        let updates: Vec<ItemUpdate> = session
            .moving_ids
            .iter()
            .filter_map(|id| {
                session.initial_positions.get(id).map(|initial| {
                    let moved = *initial + delta;
                    ItemUpdate::new(id.clone(), ItemChanges::position(moved.x, moved.y))
                })
            })
            .collect();

        self.guides = snapped.guides();
        if updates.is_empty() {
            return Vec::new();
        }
        self.index_dirty = true;
        vec![CanvasEffect::ItemsUpdated(updates)]
    }
}
