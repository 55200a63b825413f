//! Pointer and keyboard input handling for the canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. Drag, marquee and edit sessions are enum
//! variants, so two of them can never be open at once.
//!
//! ## Modules
//!
//! - `events` - Host events and modifier keys
//! - `state` - Input state machine enum and helper methods
//! - `mouse_down` - Pointer down handling (selection, drag/marquee start)
//! - `drag` - Pointer move handling (drag with snapping, marquee resize)
//! - `mouse_up` - Pointer up handling (finalize drag and marquee)
//! - `edit` - Inline text editing and keyboard handling
//! - `shortcuts` - Keyboard shortcut resolution
//! - `transform` - Zoom and coordinate conversion

pub mod coords;
mod drag;
mod edit;
pub mod events;
mod mouse_down;
mod mouse_up;
pub mod shortcuts;
mod state;
mod transform;

pub use events::{CanvasEvent, Key, Modifiers, PointerButton};
pub use shortcuts::Shortcut;
pub use state::{DragSession, EditSession, InputState, MarqueeSession};
