//! Canvas transformations - zoom and canvas placement.
//!
//! Both change how device pixels map to canvas units, so measured bounds
//! go stale. The host re-measures through
//! [`CanvasEngine::refresh_bounds`] after calling either.

use crate::engine::CanvasEngine;
use crate::geometry::Point;
use crate::input::coords::{CoordinateConverter, Viewport};
use tracing::debug;

impl CanvasEngine {
    /// Convert device position to canvas position.
    pub fn device_to_canvas(&self, pos: Point) -> Point {
        CoordinateConverter::device_to_canvas(pos, &self.viewport)
    }

    /// Convert canvas position to device position.
    pub fn canvas_to_device(&self, pos: Point) -> Point {
        CoordinateConverter::canvas_to_device(pos, &self.viewport)
    }

    /// Set the zoom, clamped to the configured range. Returns whether the
    /// effective zoom changed.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        let (min, max) = self.settings.zoom_bounds();
        let clamped = Viewport::clamp_zoom(zoom, min, max);
        if (clamped - self.viewport.zoom).abs() < f32::EPSILON {
            return false;
        }
        debug!(from = self.viewport.zoom, to = clamped, "Zoom changed");
        self.viewport.zoom = clamped;
        self.index_dirty = true;
        true
    }

    /// Set the device position of the canvas element's top-left corner.
    pub fn set_canvas_origin(&mut self, origin: Point) -> bool {
        if self.viewport.origin == origin {
            return false;
        }
        self.viewport.origin = origin;
        self.index_dirty = true;
        true
    }
}
