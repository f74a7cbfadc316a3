#![forbid(unsafe_code)]

//! Interaction models for the Fenster widget toolkit.
//!
//! Four components, leaf to root:
//!
//! - [`textedit::TextEditBuffer`] — single-line text content, cursor and
//!   selection indices, and the horizontal scroll that keeps the cursor
//!   visible.
//! - [`scroll::ScrollbarModel`] — scroll offset, content/viewport extents,
//!   and thumb geometry/drag state for a vertical scroll region.
//! - [`drag::DragResizeController`] — the drag-mode state machine and
//!   geometry math for moving/resizing a window against a parent bound.
//! - [`window::WindowFrame`] — the outward-facing window abstraction:
//!   open/close lifecycle, z-order, close button, and screen-edge
//!   containment, composed around a drag controller.
//!
//! None of these draw or own the event loop. The host framework
//! translates its pointer/keyboard/frame-tick callbacks into operations
//! on these models, reads back an
//! [`EventStatus`](fenster_core::EventStatus), and re-runs its own
//! measure/arrange/draw from the updated state.

pub mod drag;
pub mod scroll;
pub mod textedit;
pub mod window;

pub use drag::{DragMode, DragResizeController, DragUpdate, cursor_for_mode};
pub use scroll::ScrollbarModel;
pub use textedit::{Clipboard, CursorBlink, Motion, TextEditBuffer};
pub use window::{
    OffScreenPolicy, WindowChrome, WindowError, WindowFrame, WindowHost, WindowState,
};
