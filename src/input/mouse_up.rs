//! Pointer up handling - finalize drag and marquee sessions.
//!
//! Pointer capture loss is treated exactly like a release.

use super::state::InputState;
use crate::engine::{CanvasEffect, CanvasEngine, CanvasView};
use crate::selection::marquee_hits;
use tracing::debug;

impl CanvasEngine {
    pub(crate) fn handle_pointer_up(&mut self, view: &CanvasView<'_>) -> Vec<CanvasEffect> {
        match self.input_state {
            InputState::Dragging(_) => {
                debug!("Drag finished");
                self.input_state.reset();
                self.guides.clear();
                Vec::new()
            }
            InputState::Marquee(_) => self.finish_marquee(view),
            InputState::Idle | InputState::Editing(_) => Vec::new(),
        }
    }

    fn finish_marquee(&mut self, view: &CanvasView<'_>) -> Vec<CanvasEffect> {
        let Some(session) = self.input_state.take_marquee() else {
            return Vec::new();
        };

        let min = self.settings.marquee_min_size;
        if session.rect.width <= min || session.rect.height <= min {
            debug!("Marquee too small, treated as a click");
            return Vec::new();
        }

        let hits = marquee_hits(session.rect, view.items, &self.bounds);
        debug!(selected = hits.len(), "Marquee finished");
        vec![CanvasEffect::SelectionChanged(hits)]
    }
}
