//! Interactive canvas engine for composing printable labels.
//!
//! The host renders items and forwards pointer and keyboard events; the
//! [`engine::CanvasEngine`] turns them into selection changes and item
//! updates with edge/center snapping, marquee selection and inline text
//! editing. [`editor::LabelEditor`] wires the engine to a
//! [`document::LabelDocument`] for hosts that don't keep their own store.

pub mod bounds;
pub mod constants;
pub mod document;
pub mod editor;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod perf;
pub mod print;
pub mod selection;
pub mod settings;
pub mod snap;
pub mod spatial_index;
pub mod template;
pub mod types;
