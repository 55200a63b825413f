//! Canvas interaction engine.
//!
//! The engine owns no items. Each event is handled against a read-only
//! [`CanvasView`] of the host's item list and selection, and produces a list
//! of [`CanvasEffect`]s for the host to apply. Between events the engine
//! keeps only interaction state: the open session, the snap guides, the
//! bounds cache and the hit-test index.
//!
//! Event handlers live in the `input` modules, split by gesture.

use crate::bounds::{BoundsCache, BoundsMeasurer, BoundsProvider, ItemBounds};
use crate::geometry::{Point, Rect};
use crate::input::coords::{CoordinateConverter, Viewport};
use crate::input::{CanvasEvent, EditSession, InputState};
use crate::selection::SelectionSet;
use crate::settings::EditorSettings;
use crate::snap::{SnapEngine, SnapGuides};
use crate::spatial_index::SpatialIndex;
use crate::types::{CanvasItem, ItemId, ItemUpdate, Size};
use serde::Serialize;

/// Read-only view of host state for one event.
#[derive(Clone, Copy, Debug)]
pub struct CanvasView<'a> {
    pub items: &'a [CanvasItem],
    pub selection: &'a SelectionSet,
    pub size: Size,
}

impl<'a> CanvasView<'a> {
    pub fn new(items: &'a [CanvasItem], selection: &'a SelectionSet, size: Size) -> Self {
        Self {
            items,
            selection,
            size,
        }
    }

    pub fn item(&self, id: &ItemId) -> Option<&'a CanvasItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.item(id).is_some()
    }
}

/// Change requested of the host.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CanvasEffect {
    /// Selection becomes exactly these ids
    SelectionChanged(Vec<ItemId>),
    /// Apply this batch atomically
    ItemsUpdated(Vec<ItemUpdate>),
    DeleteRequested(Vec<ItemId>),
    DuplicateRequested(Vec<ItemId>),
    /// Pointer went down on empty canvas
    CanvasClicked,
}

pub struct CanvasEngine {
    pub(crate) settings: EditorSettings,
    pub(crate) viewport: Viewport,
    pub(crate) bounds: BoundsCache,
    pub(crate) index: SpatialIndex,
    /// Set when item positions changed since the index was built
    pub(crate) index_dirty: bool,
    pub(crate) snap: SnapEngine,
    pub(crate) input_state: InputState,
    pub(crate) guides: SnapGuides,
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl CanvasEngine {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            bounds: BoundsCache::new(settings.text_estimate),
            snap: SnapEngine::new(settings.snap_threshold),
            viewport: Viewport::default(),
            index: SpatialIndex::new(),
            index_dirty: true,
            input_state: InputState::Idle,
            guides: SnapGuides::default(),
            settings,
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    /// Alignment guides of the current drag tick
    pub fn guides(&self) -> SnapGuides {
        self.guides
    }

    /// Rubber band to draw, if a marquee is open
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.input_state.marquee_rect()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.input_state.edit_session()
    }

    pub fn bounds(&self) -> &BoundsCache {
        &self.bounds
    }

    pub fn bounds_of(&self, item: &CanvasItem) -> ItemBounds {
        self.bounds.bounds_of(item)
    }

    /// Re-measure every item and rebuild the hit-test index.
    ///
    /// Call after any item-list change and after zoom or origin changes.
    pub fn refresh_bounds<M: BoundsMeasurer + ?Sized>(
        &mut self,
        items: &[CanvasItem],
        measurer: &M,
    ) {
        self.bounds.rebuild(items, &self.viewport, measurer);
        self.rebuild_index(items);
    }

    pub(crate) fn rebuild_index(&mut self, items: &[CanvasItem]) {
        let bounds = &self.bounds;
        self.index.rebuild(
            items
                .iter()
                .map(|item| (item.id.clone(), bounds.resolve(item).rect)),
        );
        self.index_dirty = false;
    }

    /// Topmost item whose bounds contain `point` (canvas units).
    ///
    /// Selected items paint above unselected ones, so they win overlaps.
    pub fn hit_test(&self, point: Point, selection: &SelectionSet) -> Option<ItemId> {
        self.index.topmost_at(point, |id| selection.contains(id))
    }

    pub(crate) fn to_canvas(&self, device: Point) -> Point {
        CoordinateConverter::device_to_canvas(device, &self.viewport)
    }

    /// Hit test against the view, rebuilding the index if items moved.
    pub(crate) fn item_at(&mut self, device: Point, view: &CanvasView<'_>) -> Option<ItemId> {
        if self.index_dirty || self.index.len() != view.items.len() {
            self.rebuild_index(view.items);
        }
        let point = self.to_canvas(device);
        self.hit_test(point, view.selection).filter(|id| view.contains(id))
    }

    /// Handle one host event and return the effects to apply.
    pub fn handle_event(&mut self, event: &CanvasEvent, view: &CanvasView<'_>) -> Vec<CanvasEffect> {
        match event {
            CanvasEvent::PointerDown {
                position,
                button,
                modifiers,
            } => self.handle_pointer_down(*position, *button, *modifiers, view),
            CanvasEvent::PointerMove { position } => self.handle_pointer_move(*position, view),
            CanvasEvent::PointerUp { .. } | CanvasEvent::PointerCaptureLost => {
                self.handle_pointer_up(view)
            }
            CanvasEvent::DoubleClick { position } => self.handle_double_click(*position, view),
            CanvasEvent::DeleteHandle { id } => self.handle_delete_handle(id, view),
            CanvasEvent::TextInput { text } => {
                self.handle_text_input(text);
                Vec::new()
            }
            CanvasEvent::Key {
                key,
                modifiers,
                text_input_focused,
            } => self.handle_key(*key, *modifiers, *text_input_focused, view),
            CanvasEvent::Blur => self.commit_edit(view),
        }
    }
}
