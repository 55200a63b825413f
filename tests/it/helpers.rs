//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDocBuilder` - Builder pattern for creating test documents with items
//! - Event constructors like `pointer_down()`, `pointer_move()`, `key()`
//! - Common assertions on item positions

#![allow(dead_code)]

use labelboard::bounds::NoMeasurements;
use labelboard::document::LabelDocument;
use labelboard::editor::LabelEditor;
use labelboard::engine::CanvasEffect;
use labelboard::geometry::{Point, Rect};
use labelboard::input::{CanvasEvent, Key, Modifiers, PointerButton};
use labelboard::settings::EditorSettings;
use labelboard::types::{CanvasItem, ItemId, ItemKind, Size};
use std::collections::HashMap;

// ============================================================================
// TestDocBuilder - Builder pattern for creating test documents
// ============================================================================

/// Builder for creating test documents with items and a selection.
///
/// # Example
/// ```ignore
/// let editor = TestDocBuilder::new()
///     .with_qr_item("a", (100.0, 100.0))
///     .with_text_item("t", "Hello", (10.0, 10.0))
///     .with_selection(&["a"])
///     .build_editor();
/// ```
pub struct TestDocBuilder {
    items: Vec<CanvasItem>,
    selection: Vec<ItemId>,
    size: Size,
    zoom: f32,
    settings: EditorSettings,
}

impl Default for TestDocBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDocBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selection: Vec::new(),
            // 378x378 canvas units, so presses up to there land on the label
            size: Size::new(100.0, 100.0),
            zoom: 1.0,
            settings: EditorSettings::default(),
        }
    }

    /// Add a text item with the given content.
    pub fn with_text_item(mut self, id: &str, text: &str, pos: (f32, f32)) -> Self {
        let mut item = CanvasItem::new(ItemId::from(id), ItemKind::Text, pos);
        item.content = text.to_string();
        self.items.push(item);
        self
    }

    /// Add a 40x40 QR item.
    pub fn with_qr_item(mut self, id: &str, pos: (f32, f32)) -> Self {
        self.items
            .push(CanvasItem::new(ItemId::from(id), ItemKind::Qr, pos));
        self
    }

    /// Add a 40x40 image item.
    pub fn with_image_item(mut self, id: &str, pos: (f32, f32)) -> Self {
        self.items
            .push(CanvasItem::new(ItemId::from(id), ItemKind::Image, pos));
        self
    }

    pub fn with_selection(mut self, ids: &[&str]) -> Self {
        self.selection = ids.iter().map(|s| ItemId::from(*s)).collect();
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> LabelDocument {
        let mut doc = LabelDocument::from_items(self.items, self.size, &self.settings);
        doc.set_selection(self.selection);
        doc
    }

    /// Headless editor: text items resolve to the 60x24 estimate.
    pub fn build_editor(self) -> LabelEditor<NoMeasurements> {
        let zoom = self.zoom;
        let settings = self.settings.clone();
        let mut editor = LabelEditor::headless(self.build(), settings);
        editor.set_zoom(zoom);
        editor
    }

    /// Editor whose measurer reports the given device rectangles.
    pub fn build_measured_editor(
        self,
        measurements: &[(&str, Rect)],
    ) -> LabelEditor<HashMap<ItemId, Rect>> {
        let zoom = self.zoom;
        let settings = self.settings.clone();
        let measurer: HashMap<ItemId, Rect> = measurements
            .iter()
            .map(|(id, rect)| (ItemId::from(*id), *rect))
            .collect();
        let mut editor = LabelEditor::new(self.build(), settings, measurer);
        editor.set_zoom(zoom);
        editor
    }
}

// ============================================================================
// Ids
// ============================================================================

pub fn id(s: &str) -> ItemId {
    ItemId::from(s)
}

pub fn ids(list: &[&str]) -> Vec<ItemId> {
    list.iter().map(|s| ItemId::from(*s)).collect()
}

// ============================================================================
// Events
// ============================================================================

pub fn pointer_down(x: f32, y: f32) -> CanvasEvent {
    pointer_down_with(x, y, Modifiers::NONE)
}

pub fn pointer_down_with(x: f32, y: f32, modifiers: Modifiers) -> CanvasEvent {
    CanvasEvent::PointerDown {
        position: Point::new(x, y),
        button: PointerButton::Primary,
        modifiers,
    }
}

pub fn pointer_move(x: f32, y: f32) -> CanvasEvent {
    CanvasEvent::PointerMove {
        position: Point::new(x, y),
    }
}

pub fn pointer_up(x: f32, y: f32) -> CanvasEvent {
    CanvasEvent::PointerUp {
        position: Point::new(x, y),
    }
}

pub fn double_click(x: f32, y: f32) -> CanvasEvent {
    CanvasEvent::DoubleClick {
        position: Point::new(x, y),
    }
}

pub fn text_input(text: &str) -> CanvasEvent {
    CanvasEvent::TextInput {
        text: text.to_string(),
    }
}

pub fn key(key: Key) -> CanvasEvent {
    key_with(key, Modifiers::NONE)
}

pub fn key_with(key: Key, modifiers: Modifiers) -> CanvasEvent {
    CanvasEvent::Key {
        key,
        modifiers,
        text_input_focused: false,
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Position of `id` in the editor's document.
pub fn position_of(editor: &LabelEditor<impl labelboard::bounds::BoundsMeasurer>, id: &str) -> (f32, f32) {
    let item = editor
        .document()
        .item(&ItemId::from(id))
        .unwrap_or_else(|| panic!("item {id} not in document"));
    (item.x, item.y)
}

pub fn selected(editor: &LabelEditor<impl labelboard::bounds::BoundsMeasurer>) -> Vec<ItemId> {
    editor.document().selection().to_vec()
}

/// True if any effect in the list updates item contents or positions.
pub fn has_item_updates(effects: &[CanvasEffect]) -> bool {
    effects
        .iter()
        .any(|effect| matches!(effect, CanvasEffect::ItemsUpdated(_)))
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
