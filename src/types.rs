//! Core types for the label canvas.
//!
//! This module defines the item model handed to the canvas engine by its
//! host, plus the partial-update records the engine emits back.

use crate::constants::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_GRAPHIC_SIZE, DEFAULT_LABEL_SIZE_MM,
    DEFAULT_QR_CONTENT, DEFAULT_TEXT_COLOR, DEFAULT_TEXT_CONTENT, MM_TO_PX,
};
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identity
// ============================================================================

/// Immutable identity of a canvas item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh, globally unique id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Label Size
// ============================================================================

/// Label dimensions in millimeters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size of the label in canvas units
    pub fn to_canvas(&self) -> (f32, f32) {
        (self.width * MM_TO_PX, self.height * MM_TO_PX)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_SIZE_MM.0, DEFAULT_LABEL_SIZE_MM.1)
    }
}

// ============================================================================
// Item Kinds & Styles
// ============================================================================

/// What an item renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemKind {
    /// Free text; its rendered size is intrinsic to content and style
    Text,
    /// QR code encoding `content`
    Qr,
    /// Image referenced by `content` (empty shows a placeholder)
    Image,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Text => "Text",
            ItemKind::Qr => "QR",
            ItemKind::Image => "Image",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Typography attributes. Carried by every item, only rendered for text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: f32,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
    /// Hex color string (e.g., "#000000")
    pub color: String,
    pub text_align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_weight: FontWeight::default(),
            font_style: FontStyle::default(),
            text_decoration: TextDecoration::default(),
            color: DEFAULT_TEXT_COLOR.to_string(),
            text_align: TextAlign::default(),
        }
    }
}

// ============================================================================
// Canvas Items
// ============================================================================

/// An item placed on the label canvas.
///
/// Position and size are in canvas units (device pixels at 100% zoom).
/// For text items `width`/`height` are advisory only; the engine resolves
/// their real extent through [`crate::bounds::BoundsCache`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Text content, QR payload, or image source
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(flatten)]
    pub style: TextStyle,
}

impl CanvasItem {
    /// Create an item of `kind` with the kind's defaults at `origin`.
    pub fn new(id: ItemId, kind: ItemKind, origin: (f32, f32)) -> Self {
        let (content, (width, height)) = match kind {
            ItemKind::Text => (DEFAULT_TEXT_CONTENT.to_string(), (0.0, 0.0)),
            ItemKind::Qr => (DEFAULT_QR_CONTENT.to_string(), DEFAULT_GRAPHIC_SIZE),
            ItemKind::Image => (String::new(), DEFAULT_GRAPHIC_SIZE),
        };
        Self {
            id,
            kind,
            content,
            x: origin.0,
            y: origin.1,
            width,
            height,
            style: TextStyle::default(),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rectangle from the stored fields, ignoring measurement
    pub fn stored_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_text(&self) -> bool {
        self.kind == ItemKind::Text
    }

    /// Apply a partial update. Identity never changes.
    pub fn apply(&mut self, changes: &ItemChanges) {
        if let Some(x) = changes.x {
            self.x = x;
        }
        if let Some(y) = changes.y {
            self.y = y;
        }
        if let Some(width) = changes.width {
            self.width = width;
        }
        if let Some(height) = changes.height {
            self.height = height;
        }
        if let Some(ref content) = changes.content {
            self.content = content.clone();
        }
        if let Some(ref style) = changes.style {
            self.style = style.clone();
        }
    }
}

/// Partial field changes for one item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl ItemChanges {
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn size(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One entry of a batched update: `changes` applied to item `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub id: ItemId,
    pub changes: ItemChanges,
}

impl ItemUpdate {
    pub fn new(id: ItemId, changes: ItemChanges) -> Self {
        Self { id, changes }
    }
}
