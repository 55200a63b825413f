//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for hit testing on the canvas.
//! Pointer-down resolves the item under the pointer in O(log n) instead of
//! scanning every item's bounds.

use crate::geometry::{Point, Rect};
use crate::types::ItemId;
use rstar::{AABB, RTree, RTreeObject};

/// A spatial entry representing a canvas item's resolved bounding box.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    /// Position in the item list; later items paint on top
    pub z_order: usize,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, z_order: usize, rect: Rect) -> Self {
        Self {
            item_id,
            z_order,
            min_x: rect.x,
            min_y: rect.y,
            max_x: rect.right(),
            max_y: rect.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index for canvas items using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Build a spatial index from `(id, rect)` pairs in list order.
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = (ItemId, Rect)>,
    {
        let mut index = Self::new();
        index.rebuild(rects);
        index
    }

    /// Replace every entry. The iteration order defines the z-order.
    pub fn rebuild<I>(&mut self, rects: I)
    where
        I: IntoIterator<Item = (ItemId, Rect)>,
    {
        let entries: Vec<SpatialEntry> = rects
            .into_iter()
            .enumerate()
            .map(|(z_order, (id, rect))| SpatialEntry::new(id, z_order, rect))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    /// All items containing the point, in no particular order.
    pub fn query_point(&self, point: Point) -> Vec<ItemId> {
        self.entries_at(point)
            .into_iter()
            .map(|entry| entry.item_id.clone())
            .collect()
    }

    /// The topmost item containing the point.
    ///
    /// Items for which `raised` holds paint above all others; within each
    /// layer later items win.
    pub fn topmost_at<F>(&self, point: Point, raised: F) -> Option<ItemId>
    where
        F: Fn(&ItemId) -> bool,
    {
        self.entries_at(point)
            .into_iter()
            .max_by_key(|entry| (raised(&entry.item_id), entry.z_order))
            .map(|entry| entry.item_id.clone())
    }

    fn entries_at(&self, point: Point) -> Vec<&SpatialEntry> {
        let point_envelope = AABB::from_point([point.x, point.y]);
        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point.x, point.y))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
