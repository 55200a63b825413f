//! Print sheet layout: copies of one label tiled on a page.
//!
//! Copies flow left to right from the top-left margin and wrap to a new row
//! when the next one would cross the printable width. Page height is not
//! checked; overflowing rows continue past the page bottom.

use crate::constants::{
    A4_PAGE_SIZE_MM, DEFAULT_PRINT_COPIES, DEFAULT_PRINT_GAP_MM, DEFAULT_PRINT_MARGIN_MM,
};
use crate::geometry::Rect;
use crate::types::{CanvasItem, Size};
use serde::{Deserialize, Serialize};

/// Tolerance for a row that fits the printable width exactly
const FIT_EPSILON: f32 = 1e-3;

/// Sheet settings, all lengths in millimeters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrintConfig {
    pub copies: u32,
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_left: f32,
    pub gap_x: f32,
    pub gap_y: f32,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            copies: DEFAULT_PRINT_COPIES,
            page_width: A4_PAGE_SIZE_MM.0,
            page_height: A4_PAGE_SIZE_MM.1,
            margin_top: DEFAULT_PRINT_MARGIN_MM,
            margin_left: DEFAULT_PRINT_MARGIN_MM,
            gap_x: DEFAULT_PRINT_GAP_MM,
            gap_y: DEFAULT_PRINT_GAP_MM,
        }
    }
}

/// One placed copy; `x`/`y` is its top-left on the page in millimeters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Tile {
    pub index: u32,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrintLayout {
    pub columns: u32,
    pub rows: u32,
    pub tiles: Vec<Tile>,
}

impl PrintConfig {
    /// Width available to tiles: the page minus the left margin
    pub fn printable_width(&self) -> f32 {
        self.page_width - self.margin_left
    }

    /// How many labels fit in one row. Always at least one.
    pub fn columns_for(&self, label: Size) -> u32 {
        let pitch = label.width + self.gap_x;
        if !pitch.is_finite() || pitch <= 0.0 {
            return 1;
        }
        let fit = ((self.printable_width() + self.gap_x + FIT_EPSILON) / pitch).floor();
        if fit >= 1.0 { fit as u32 } else { 1 }
    }

    pub fn layout(&self, label: Size) -> PrintLayout {
        let columns = self.columns_for(label);
        let rows = self.copies.div_ceil(columns);
        let tiles = (0..self.copies)
            .map(|index| {
                let column = index % columns;
                let row = index / columns;
                Tile {
                    index,
                    x: self.margin_left + column as f32 * (label.width + self.gap_x),
                    y: self.margin_top + row as f32 * (label.height + self.gap_y),
                }
            })
            .collect();

        PrintLayout {
            columns,
            rows,
            tiles,
        }
    }
}

/// An item's rectangle within the label, in millimeters.
///
/// Text items use their stored (advisory) size; the print path never sees
/// measured bounds.
pub fn item_print_rect(item: &CanvasItem, mm_to_px: f32) -> Rect {
    let rect = item.stored_rect();
    Rect::new(
        rect.x / mm_to_px,
        rect.y / mm_to_px,
        rect.width / mm_to_px,
        rect.height / mm_to_px,
    )
}
