//! Snapping Engine: per-axis alignment against the other items.
//!
//! A dragged rectangle exposes three references per axis (start, center,
//! end). They are compared against the references of every other item in
//! list order, trying the pairs of [`SNAP_PRIORITY`] in order. The first
//! pair within the threshold locks that axis for the call and produces a
//! guide line. The two axes are resolved independently.

use crate::bounds::BoundsProvider;
use crate::geometry::{Point, Rect};
use crate::types::{CanvasItem, ItemId};

/// One reference along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisAnchor {
    /// Left or top edge
    Start,
    /// Horizontal center or vertical middle
    Center,
    /// Right or bottom edge
    End,
}

/// `(own, other)` pairs in tie-break order.
pub const SNAP_PRIORITY: [(AxisAnchor, AxisAnchor); 5] = [
    (AxisAnchor::Start, AxisAnchor::Start),
    (AxisAnchor::Center, AxisAnchor::Center),
    (AxisAnchor::End, AxisAnchor::End),
    (AxisAnchor::Start, AxisAnchor::End),
    (AxisAnchor::End, AxisAnchor::Start),
];

/// Start/center/end of a span along one axis.
#[derive(Clone, Copy, Debug)]
struct AxisSpan {
    start: f32,
    length: f32,
}

impl AxisSpan {
    fn new(start: f32, length: f32) -> Self {
        Self { start, length }
    }

    fn offset(&self, anchor: AxisAnchor) -> f32 {
        match anchor {
            AxisAnchor::Start => 0.0,
            AxisAnchor::Center => self.length / 2.0,
            AxisAnchor::End => self.length,
        }
    }

    fn at(&self, anchor: AxisAnchor) -> f32 {
        self.start + self.offset(anchor)
    }
}

/// Snapped start position and the guide it aligned to.
#[derive(Clone, Copy, Debug, PartialEq)]
struct AxisSnap {
    start: f32,
    guide: f32,
}

fn snap_axis(own: AxisSpan, other: AxisSpan, threshold: f32) -> Option<AxisSnap> {
    SNAP_PRIORITY.iter().find_map(|&(own_anchor, other_anchor)| {
        let target = other.at(other_anchor);
        if (own.at(own_anchor) - target).abs() <= threshold {
            Some(AxisSnap {
                start: target - own.offset(own_anchor),
                guide: target,
            })
        } else {
            None
        }
    })
}

/// Result of one snap computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapResult {
    pub x: f32,
    pub y: f32,
    /// X position of the vertical guide, if the x axis snapped
    pub vertical_guide: Option<f32>,
    /// Y position of the horizontal guide, if the y axis snapped
    pub horizontal_guide: Option<f32>,
}

impl SnapResult {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn guides(&self) -> SnapGuides {
        SnapGuides {
            vertical: self.vertical_guide,
            horizontal: self.horizontal_guide,
        }
    }
}

/// Alignment lines shown while dragging.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SnapGuides {
    pub vertical: Option<f32>,
    pub horizontal: Option<f32>,
}

impl SnapGuides {
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Edge and center snapping with a fixed threshold.
#[derive(Clone, Copy, Debug)]
pub struct SnapEngine {
    threshold: f32,
}

impl SnapEngine {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Snap a `width`×`height` rectangle whose top-left would be at
    /// `candidate` against every item not in `exclude`.
    pub fn compute_snap<B>(
        &self,
        candidate: Point,
        width: f32,
        height: f32,
        exclude: &[ItemId],
        items: &[CanvasItem],
        bounds: &B,
    ) -> SnapResult
    where
        B: BoundsProvider + ?Sized,
    {
        let own_x = AxisSpan::new(candidate.x, width);
        let own_y = AxisSpan::new(candidate.y, height);

        let mut x_snap: Option<AxisSnap> = None;
        let mut y_snap: Option<AxisSnap> = None;

        for item in items.iter().filter(|item| !exclude.contains(&item.id)) {
            if x_snap.is_some() && y_snap.is_some() {
                break;
            }
            let other: Rect = bounds.bounds_of(item).rect;

            if x_snap.is_none() {
                x_snap = snap_axis(own_x, AxisSpan::new(other.x, other.width), self.threshold);
            }
            if y_snap.is_none() {
                y_snap = snap_axis(own_y, AxisSpan::new(other.y, other.height), self.threshold);
            }
        }

        SnapResult {
            x: x_snap.map_or(candidate.x, |snap| snap.start),
            y: y_snap.map_or(candidate.y, |snap| snap.start),
            vertical_guide: x_snap.map(|snap| snap.guide),
            horizontal_guide: y_snap.map(|snap| snap.guide),
        }
    }
}
