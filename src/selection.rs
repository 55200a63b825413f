//! Selection Manager: the ordered set of selected item ids.
//!
//! Insertion order is preserved and the last element is the primary
//! selection, which drives the single-item properties view. Every operation
//! is total; ids unknown to the item list are simply carried or ignored.

use crate::bounds::BoundsProvider;
use crate::geometry::Rect;
use crate::types::{CanvasItem, ItemId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: Vec<ItemId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ids, keeping the first occurrence of duplicates.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ItemId>,
    {
        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        set
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn to_vec(&self) -> Vec<ItemId> {
        self.ids.clone()
    }

    /// The last selected id
    pub fn primary(&self) -> Option<&ItemId> {
        self.ids.last()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn insert(&mut self, id: ItemId) {
        if !self.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Selection becomes exactly `[id]`
    pub fn select_exclusive(&mut self, id: ItemId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Remove `id` if present, otherwise append it. Never reorders.
    pub fn toggle(&mut self, id: ItemId) {
        if let Some(pos) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Selection becomes `ids` in the given order
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ItemId>,
    {
        *self = Self::from_ids(ids);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop every id in `ids`; returns whether anything was removed.
    pub fn remove_all(&mut self, ids: &[ItemId]) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| !ids.contains(id));
        self.ids.len() != before
    }

    /// Replace the selection with the items whose bounds center lies in
    /// `rect` (inclusive), in item list order.
    pub fn marquee_select<B>(&mut self, rect: Rect, items: &[CanvasItem], bounds: &B)
    where
        B: BoundsProvider + ?Sized,
    {
        *self = Self::from_ids(marquee_hits(rect, items, bounds));
    }
}

/// Ids of the items whose bounds center lies within `rect`.
pub fn marquee_hits<B>(rect: Rect, items: &[CanvasItem], bounds: &B) -> Vec<ItemId>
where
    B: BoundsProvider + ?Sized,
{
    items
        .iter()
        .filter(|item| rect.contains(bounds.bounds_of(item).rect.center()))
        .map(|item| item.id.clone())
        .collect()
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
