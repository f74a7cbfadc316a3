#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The host framework translates its native pointer/keyboard callbacks into
//! these types before calling widget operations. All events derive `Clone`
//! and `PartialEq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Pointer events carry both a widget-local and a parent-global position,
//!   because drag math anchors against the global one while hit testing uses
//!   the local one.
//! - `Modifiers` use bitflags for easy combination.
//! - Widgets report back an [`EventStatus`] so the host knows whether to
//!   redraw or re-run layout.

use bitflags::bitflags;

use crate::geometry::Point;

/// A pointer event as delivered by the host framework.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,

    /// Position relative to the receiving widget's top-left corner.
    pub position: Point,

    /// Position in the widget's parent coordinate space.
    pub global_position: Point,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a new pointer event; local and global positions coincide.
    #[must_use]
    pub const fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            global_position: position,
            modifiers: Modifiers::NONE,
        }
    }

    /// Set the parent-global position.
    #[must_use]
    pub const fn with_global(mut self, global: Point) -> Self {
        self.global_position = global;
        self
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEventKind {
    /// Button pressed down.
    Down(PointerButton),

    /// Button released.
    Up(PointerButton),

    /// Pointer moved (with or without a button held).
    Moved,

    /// Wheel scrolled; positive `delta` is away from the user (content
    /// scrolls up).
    Wheel { delta: f32 },
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button.
    Middle,
}

bitflags! {
    /// Modifier keys that can be held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A bound editing command, already resolved from raw keys by the host's
/// keybinding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// Remove the character before the cursor (or the selection).
    DeleteBackward,
    /// Remove the character after the cursor (or the selection).
    DeleteForward,
    /// Move the cursor one character left.
    CursorLeft,
    /// Move the cursor one character right.
    CursorRight,
    /// Move the cursor to the start of the text.
    CursorStart,
    /// Move the cursor to the end of the text.
    CursorEnd,
    /// Select the entire text.
    SelectAll,
    /// Copy the selection to the clipboard.
    Copy,
    /// Cut the selection to the clipboard.
    Cut,
    /// Request a clipboard paste.
    Paste,
}

/// Pointer cursor shapes a widget can request from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    /// Default arrow.
    #[default]
    Arrow,
    /// Text I-beam.
    IBeam,
    /// Horizontal resize (left/right edge).
    ResizeHorizontal,
    /// Vertical resize (top/bottom edge).
    ResizeVertical,
    /// Diagonal resize (corner).
    ResizeDiagonal,
}

/// What the host must do after a widget operation.
///
/// Ordered so that two statuses combine via [`EventStatus::merge`]:
/// `Relayout` implies `Redraw` implies nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum EventStatus {
    /// Event not consumed; no state changed.
    #[default]
    Ignored,
    /// State changed; repaint the widget.
    Redraw,
    /// Geometry changed; re-run measure/arrange, then repaint.
    Relayout,
}

impl EventStatus {
    /// Combine two statuses, keeping the stronger request.
    #[inline]
    #[must_use]
    pub fn merge(self, other: EventStatus) -> EventStatus {
        self.max(other)
    }

    /// Check if the event was consumed.
    #[inline]
    #[must_use]
    pub const fn consumed(&self) -> bool {
        !matches!(self, EventStatus::Ignored)
    }
}
