//! Application-wide constants.
//!
//! Centralizes magic numbers used by the canvas engine so that the
//! interaction rules (snapping, marquee, duplication) live in one place.
//! Most of these are the defaults of [`crate::settings::EditorSettings`].

// ============================================================================
// Units
// ============================================================================

/// Canvas units (device pixels at 100% zoom) per millimeter, at 96 DPI.
pub const MM_TO_PX: f32 = 3.78;

/// Default label size in millimeters (width, height)
pub const DEFAULT_LABEL_SIZE_MM: (f32, f32) = (50.0, 30.0);

// ============================================================================
// Interaction
// ============================================================================

/// Maximum distance (canvas units, inclusive) at which an edge or center snaps
pub const SNAP_THRESHOLD: f32 = 4.0;

/// A marquee must exceed this size on both axes to select anything
pub const MARQUEE_MIN_SIZE: f32 = 3.0;

/// Bounds used for a text item that has not been measured yet
pub const ESTIMATED_TEXT_SIZE: (f32, f32) = (60.0, 24.0);

/// Offset applied to duplicated items
pub const DUPLICATE_OFFSET: (f32, f32) = (10.0, 10.0);

/// Position of newly added items
pub const NEW_ITEM_ORIGIN: (f32, f32) = (10.0, 10.0);

// ============================================================================
// Zoom
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.5;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 2.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

// ============================================================================
// Item Defaults
// ============================================================================

/// Default font size for text items
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Default font family for text items
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Default text color (black)
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Placeholder content of a freshly added text item
pub const DEFAULT_TEXT_CONTENT: &str = "Nội dung...";

/// Placeholder payload of a freshly added QR item
pub const DEFAULT_QR_CONTENT: &str = "https://example.com";

/// Stored size of new QR and image items
pub const DEFAULT_GRAPHIC_SIZE: (f32, f32) = (40.0, 40.0);

// ============================================================================
// Print Defaults (A4)
// ============================================================================

/// Default number of copies tiled on the print page
pub const DEFAULT_PRINT_COPIES: u32 = 10;

/// A4 page size in millimeters
pub const A4_PAGE_SIZE_MM: (f32, f32) = (210.0, 297.0);

/// Default top and left page margin in millimeters
pub const DEFAULT_PRINT_MARGIN_MM: f32 = 10.0;

/// Default gap between tiled labels in millimeters
pub const DEFAULT_PRINT_GAP_MM: f32 = 2.0;

// ============================================================================
// Performance
// ============================================================================

/// Pointer-move handling slower than this is reported when profiling
pub const POINTER_MOVE_BUDGET_MS: f64 = 4.0;
