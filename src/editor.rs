//! Document plus engine, wired together.
//!
//! [`LabelEditor`] is what a host embeds: it forwards events to the engine,
//! applies the resulting effects to the document and keeps the bounds cache
//! in step with the item list.

use crate::bounds::{BoundsMeasurer, NoMeasurements};
use crate::document::LabelDocument;
use crate::engine::{CanvasEffect, CanvasEngine};
use crate::geometry::Point;
use crate::input::CanvasEvent;
use crate::settings::EditorSettings;
use crate::template::LabelTemplate;
use crate::types::{ItemChanges, ItemId, ItemKind};
use tracing::debug;

pub struct LabelEditor<M: BoundsMeasurer = NoMeasurements> {
    document: LabelDocument,
    engine: CanvasEngine,
    measurer: M,
}

impl LabelEditor<NoMeasurements> {
    /// Headless editor: text items always use the estimated size.
    pub fn headless(document: LabelDocument, settings: EditorSettings) -> Self {
        Self::new(document, settings, NoMeasurements)
    }
}

impl<M: BoundsMeasurer> LabelEditor<M> {
    pub fn new(document: LabelDocument, settings: EditorSettings, measurer: M) -> Self {
        let mut editor = Self {
            document,
            engine: CanvasEngine::new(settings),
            measurer,
        };
        editor.refresh_bounds();
        editor
    }

    pub fn from_template(template: &LabelTemplate, settings: EditorSettings, measurer: M) -> Self {
        let document = LabelDocument::from_template(template, &settings);
        Self::new(document, settings, measurer)
    }

    pub fn document(&self) -> &LabelDocument {
        &self.document
    }

    pub fn engine(&self) -> &CanvasEngine {
        &self.engine
    }

    /// Access the measurer, e.g. to record new rendered extents before
    /// [`LabelEditor::refresh_bounds`].
    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    /// Re-measure after the host rendered new item extents.
    pub fn refresh_bounds(&mut self) {
        self.engine
            .refresh_bounds(self.document.items(), &self.measurer);
    }

    /// Route one event through the engine and apply its effects.
    pub fn dispatch(&mut self, event: &CanvasEvent) -> Vec<CanvasEffect> {
        let effects = self.engine.handle_event(event, &self.document.view());
        self.apply_effects(&effects);
        effects
    }

    /// Dispatch a recorded event sequence in order.
    pub fn replay<'a, I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = &'a CanvasEvent>,
    {
        let mut applied = 0;
        for event in events {
            applied += self.dispatch(event).len();
        }
        debug!(effects = applied, "Replay finished");
        applied
    }

    fn apply_effects(&mut self, effects: &[CanvasEffect]) {
        let mut items_changed = false;
        for effect in effects {
            items_changed |= self.document.apply(effect);
        }
        if items_changed {
            self.refresh_bounds();
        }
    }

    pub fn add_item(&mut self, kind: ItemKind) -> ItemId {
        let id = self.document.add(kind);
        self.refresh_bounds();
        id
    }

    pub fn update_item(&mut self, id: &ItemId, changes: ItemChanges) -> bool {
        let changed = self.document.update_item(id, changes);
        if changed {
            self.refresh_bounds();
        }
        changed
    }

    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        let changed = self.engine.set_zoom(zoom);
        if changed {
            self.refresh_bounds();
        }
        changed
    }

    /// Move the canvas element on screen and re-measure.
    pub fn set_canvas_origin(&mut self, origin: Point) -> bool {
        let changed = self.engine.set_canvas_origin(origin);
        if changed {
            self.refresh_bounds();
        }
        changed
    }

    pub fn into_document(self) -> LabelDocument {
        self.document
    }
}
