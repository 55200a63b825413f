//! Coordinate conversion utilities for canvas interactions.
//!
//! Pointer events and rendered measurements arrive in device pixels. The
//! engine works in canvas units: device pixels relative to the canvas
//! element's origin, divided by zoom.

use crate::constants::DEFAULT_ZOOM;
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Zoom and placement of the canvas element on the device surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Multiplicative zoom applied uniformly to canvas units
    pub zoom: f32,
    /// Device position of the canvas element's top-left corner
    pub origin: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            origin: Point::ZERO,
        }
    }
}

impl Viewport {
    pub fn new(zoom: f32, origin: Point) -> Self {
        Self { zoom, origin }
    }

    /// Clamp `zoom` into the allowed range
    pub fn clamp_zoom(zoom: f32, min: f32, max: f32) -> f32 {
        if !zoom.is_finite() || zoom <= 0.0 {
            return DEFAULT_ZOOM;
        }
        zoom.clamp(min, max)
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert device position to canvas position
    #[inline]
    pub fn device_to_canvas(pos: Point, viewport: &Viewport) -> Point {
        (pos - viewport.origin).scale(1.0 / viewport.zoom)
    }

    /// Convert canvas position to device position
    #[inline]
    pub fn canvas_to_device(pos: Point, viewport: &Viewport) -> Point {
        pos.scale(viewport.zoom) + viewport.origin
    }

    /// Convert a rendered device rectangle back to canvas units
    #[inline]
    pub fn rect_device_to_canvas(rect: Rect, viewport: &Viewport) -> Rect {
        let origin = Self::device_to_canvas(rect.origin(), viewport);
        Rect::new(
            origin.x,
            origin.y,
            rect.width / viewport.zoom,
            rect.height / viewport.zoom,
        )
    }
}
