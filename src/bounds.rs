//! Bounds resolution: the effective rectangle of every item.
//!
//! QR and image items are as large as their stored size says. Text items
//! are as large as their rendered content, which only the host can measure.
//! The host supplies measurements through [`BoundsMeasurer`]; the cache
//! converts them to canvas units once per item-list or zoom change and falls
//! back to an estimate for anything not rendered yet.

use crate::constants::ESTIMATED_TEXT_SIZE;
use crate::geometry::Rect;
use crate::input::coords::{CoordinateConverter, Viewport};
use crate::profile_scope;
use crate::types::{CanvasItem, ItemId};
use std::collections::HashMap;

/// Where a resolved rectangle came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsSource {
    /// Derived from the rendered extent
    Measured,
    /// Stored size, or the text estimate before first render
    Estimated,
}

/// Resolved rectangle for one item, in canvas units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemBounds {
    pub rect: Rect,
    pub source: BoundsSource,
}

/// Read access to item bounds, injected into snapping, dragging and marquee.
pub trait BoundsProvider {
    fn bounds_of(&self, item: &CanvasItem) -> ItemBounds;
}

/// Host capability that reports rendered rectangles in device pixels.
pub trait BoundsMeasurer {
    fn measure(&self, id: &ItemId) -> Option<Rect>;
}

/// Measurer for headless use: nothing is ever rendered.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMeasurements;

impl BoundsMeasurer for NoMeasurements {
    fn measure(&self, _id: &ItemId) -> Option<Rect> {
        None
    }
}

impl BoundsMeasurer for HashMap<ItemId, Rect> {
    fn measure(&self, id: &ItemId) -> Option<Rect> {
        self.get(id).copied()
    }
}

/// Estimated bounds: stored position with stored size, or the fixed text
/// estimate for text items.
pub fn estimated_bounds(item: &CanvasItem, text_estimate: (f32, f32)) -> ItemBounds {
    let rect = if item.is_text() {
        Rect::new(item.x, item.y, text_estimate.0, text_estimate.1)
    } else {
        item.stored_rect()
    };
    ItemBounds {
        rect,
        source: BoundsSource::Estimated,
    }
}

/// Measurement cache keyed by item id.
#[derive(Clone, Debug)]
pub struct BoundsCache {
    measured: HashMap<ItemId, Rect>,
    text_estimate: (f32, f32),
}

impl Default for BoundsCache {
    fn default() -> Self {
        Self::new(ESTIMATED_TEXT_SIZE)
    }
}

impl BoundsCache {
    pub fn new(text_estimate: (f32, f32)) -> Self {
        Self {
            measured: HashMap::new(),
            text_estimate,
        }
    }

    /// Replace the cache with fresh measurements of `items`.
    ///
    /// Items the measurer does not know are left out and resolve to their
    /// estimate. Entries for items no longer in the list are dropped.
    pub fn rebuild<M: BoundsMeasurer + ?Sized>(
        &mut self,
        items: &[CanvasItem],
        viewport: &Viewport,
        measurer: &M,
    ) {
        profile_scope!("bounds_rebuild");

        let measured: HashMap<ItemId, Rect> = items
            .iter()
            .filter_map(|item| {
                measurer.measure(&item.id).map(|device_rect| {
                    (
                        item.id.clone(),
                        CoordinateConverter::rect_device_to_canvas(device_rect, viewport),
                    )
                })
            })
            .collect();

        tracing::trace!(
            measured = measured.len(),
            estimated = items.len().saturating_sub(measured.len()),
            "Bounds cache rebuilt"
        );
        self.measured = measured;
    }

    /// Resolve the effective rectangle of `item`. Never fails.
    pub fn resolve(&self, item: &CanvasItem) -> ItemBounds {
        match self.measured.get(&item.id) {
            Some(rect) => ItemBounds {
                rect: *rect,
                source: BoundsSource::Measured,
            },
            None => estimated_bounds(item, self.text_estimate),
        }
    }

    pub fn is_measured(&self, id: &ItemId) -> bool {
        self.measured.contains_key(id)
    }

    pub fn measured_count(&self) -> usize {
        self.measured.len()
    }
}

impl BoundsProvider for BoundsCache {
    fn bounds_of(&self, item: &CanvasItem) -> ItemBounds {
        self.resolve(item)
    }
}
