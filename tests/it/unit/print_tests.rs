//! Unit tests for print sheet tiling.

use crate::helpers::{assert_close, id};
use labelboard::constants::MM_TO_PX;
use labelboard::print::{PrintConfig, item_print_rect};
use labelboard::types::{CanvasItem, ItemKind, Size};

#[test]
fn test_default_sheet_layout() {
    let layout = PrintConfig::default().layout(Size::new(50.0, 30.0));

    // (200 + 2) / (50 + 2) -> 3 per row, 10 copies -> 4 rows
    assert_eq!(layout.columns, 3);
    assert_eq!(layout.rows, 4);
    assert_eq!(layout.tiles.len(), 10);

    let positions: Vec<(f32, f32)> = layout.tiles.iter().map(|t| (t.x, t.y)).collect();
    assert_eq!(positions[0], (10.0, 10.0));
    assert_eq!(positions[1], (62.0, 10.0));
    assert_eq!(positions[2], (114.0, 10.0));
    assert_eq!(positions[3], (10.0, 42.0));
    assert_eq!(positions[9], (10.0, 106.0));
}

#[test]
fn test_zero_copies() {
    let config = PrintConfig {
        copies: 0,
        ..PrintConfig::default()
    };
    let layout = config.layout(Size::new(50.0, 30.0));
    assert_eq!(layout.rows, 0);
    assert!(layout.tiles.is_empty());
}

#[test]
fn test_wide_label_wraps_every_copy() {
    let config = PrintConfig {
        copies: 3,
        ..PrintConfig::default()
    };
    let layout = config.layout(Size::new(150.0, 20.0));

    assert_eq!(layout.columns, 1);
    assert_eq!(layout.rows, 3);
    assert_eq!(layout.tiles[2].y, 54.0);
}

#[test]
fn test_custom_margins_and_gaps() {
    let config = PrintConfig {
        copies: 4,
        page_width: 100.0,
        page_height: 100.0,
        margin_top: 5.0,
        margin_left: 0.0,
        gap_x: 0.0,
        gap_y: 1.0,
    };
    let layout = config.layout(Size::new(25.0, 10.0));

    assert_eq!(layout.columns, 4);
    assert_eq!(layout.rows, 1);
    assert_eq!(layout.tiles[3].x, 75.0);
    assert_eq!(layout.tiles[3].y, 5.0);
}

#[test]
fn test_config_deserializes_from_partial_json() {
    let config: PrintConfig = serde_json::from_str(r#"{"copies": 24, "gapX": 0}"#).unwrap();
    assert_eq!(config.copies, 24);
    assert_eq!(config.gap_x, 0.0);
    assert_eq!(config.page_width, 210.0);
}

#[test]
fn test_item_print_rect_in_millimeters() {
    let mut item = CanvasItem::new(id("q"), ItemKind::Qr, (37.8, 75.6));
    item.width = 37.8;
    item.height = 37.8;

    let rect = item_print_rect(&item, MM_TO_PX);
    assert_close(rect.x, 10.0);
    assert_close(rect.y, 20.0);
    assert_close(rect.width, 10.0);
    assert_close(rect.height, 10.0);
}
