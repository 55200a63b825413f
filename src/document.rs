//! The label being edited: item list, selection and label size.
//!
//! This is the host-side store the canvas engine emits effects against.
//! Lifecycle operations (add, duplicate, delete) live here because they
//! create or destroy identity, which the engine never does.

use crate::engine::{CanvasEffect, CanvasView};
use crate::selection::SelectionSet;
use crate::settings::EditorSettings;
use crate::template::{LabelTemplate, TemplatePayload};
use crate::types::{CanvasItem, ItemChanges, ItemId, ItemKind, ItemUpdate, Size};
use tracing::{debug, info};

const UNTITLED: &str = "Untitled";

#[derive(Clone, Debug, PartialEq)]
pub struct LabelDocument {
    pub name: String,
    pub folder_id: Option<String>,
    size: Size,
    items: Vec<CanvasItem>,
    selection: SelectionSet,
    new_item_origin: (f32, f32),
    duplicate_offset: (f32, f32),
}

impl Default for LabelDocument {
    fn default() -> Self {
        Self::new(Size::default(), &EditorSettings::default())
    }
}

impl LabelDocument {
    pub fn new(size: Size, settings: &EditorSettings) -> Self {
        Self {
            name: UNTITLED.to_string(),
            folder_id: None,
            size,
            items: Vec::new(),
            selection: SelectionSet::new(),
            new_item_origin: settings.new_item_origin,
            duplicate_offset: settings.duplicate_offset,
        }
    }

    /// A document holding `items` as given, with nothing selected.
    pub fn from_items(items: Vec<CanvasItem>, size: Size, settings: &EditorSettings) -> Self {
        let mut doc = Self::new(size, settings);
        doc.items = items;
        doc
    }

    /// Load a saved template. Items are copied; nothing is selected.
    pub fn from_template(template: &LabelTemplate, settings: &EditorSettings) -> Self {
        let size = Size::new(template.width, template.height);
        let mut doc = Self::from_items(template.items.clone(), size, settings);
        doc.name = template.name.clone();
        doc.folder_id = template.folder_id.clone();
        doc
    }

    pub fn to_payload(&self) -> TemplatePayload {
        TemplatePayload {
            name: self.name.clone(),
            folder_id: self.folder_id.clone(),
            width: self.size.width,
            height: self.size.height,
            items: self.items.clone(),
        }
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The view handed to the canvas engine
    pub fn view(&self) -> CanvasView<'_> {
        CanvasView::new(&self.items, &self.selection, self.size)
    }

    /// The primary selected item, for the properties panel
    pub fn primary_item(&self) -> Option<&CanvasItem> {
        self.selection.primary().and_then(|id| self.item(id))
    }

    /// Append a new item of `kind` with its defaults and select only it.
    pub fn add(&mut self, kind: ItemKind) -> ItemId {
        let item = CanvasItem::new(ItemId::generate(), kind, self.new_item_origin);
        let id = item.id.clone();
        info!(id = %id, kind = kind.label(), "Item added");
        self.items.push(item);
        self.selection.select_exclusive(id.clone());
        id
    }

    /// Clone every present item of `ids` (in list order) with a fresh id,
    /// offset and appended. The clones become the selection.
    pub fn duplicate(&mut self, ids: &[ItemId]) -> Vec<ItemId> {
        let (dx, dy) = self.duplicate_offset;
        let clones: Vec<CanvasItem> = self
            .items
            .iter()
            .filter(|item| ids.contains(&item.id))
            .map(|item| {
                let mut clone = item.clone();
                clone.id = ItemId::generate();
                clone.x += dx;
                clone.y += dy;
                clone
            })
            .collect();

        if clones.is_empty() {
            return Vec::new();
        }

        let new_ids: Vec<ItemId> = clones.iter().map(|item| item.id.clone()).collect();
        info!(count = clones.len(), "Items duplicated");
        self.items.extend(clones);
        self.selection.select_all(new_ids.iter().cloned());
        new_ids
    }

    /// Remove `ids` from the item list and the selection. Returns how many
    /// items were removed.
    pub fn delete(&mut self, ids: &[ItemId]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !ids.contains(&item.id));
        self.selection.remove_all(ids);
        let removed = before - self.items.len();
        if removed > 0 {
            info!(count = removed, "Items deleted");
        }
        removed
    }

    /// Apply a batch of partial updates. Unknown ids are skipped.
    pub fn update_items(&mut self, updates: &[ItemUpdate]) {
        for update in updates {
            if let Some(item) = self.items.iter_mut().find(|item| item.id == update.id) {
                item.apply(&update.changes);
            } else {
                debug!(id = %update.id, "Update for unknown item ignored");
            }
        }
    }

    /// Apply one item's changes, as the properties panel does.
    /// Returns false for an unknown id or an empty change set.
    pub fn update_item(&mut self, id: &ItemId, changes: ItemChanges) -> bool {
        if changes.is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.apply(&changes);
                true
            }
            None => false,
        }
    }

    pub fn set_selection<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ItemId>,
    {
        self.selection = SelectionSet::from_ids(ids);
    }

    pub fn resize_label(&mut self, size: Size) {
        debug!(width = size.width, height = size.height, "Label resized");
        self.size = size;
    }

    /// Apply one engine effect. Returns whether the item list changed, in
    /// which case bounds need re-measuring.
    pub fn apply(&mut self, effect: &CanvasEffect) -> bool {
        match effect {
            CanvasEffect::SelectionChanged(ids) => {
                self.set_selection(ids.iter().cloned());
                false
            }
            CanvasEffect::ItemsUpdated(updates) => {
                self.update_items(updates);
                !updates.is_empty()
            }
            CanvasEffect::DeleteRequested(ids) => self.delete(ids) > 0,
            CanvasEffect::DuplicateRequested(ids) => !self.duplicate(ids).is_empty(),
            CanvasEffect::CanvasClicked => false,
        }
    }
}
