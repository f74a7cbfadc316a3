#![forbid(unsafe_code)]

//! Drag/resize state machine for floating windows.
//!
//! [`DragResizeController`] classifies a pointer-down position into a
//! [`DragMode`], records the pointer-to-edge anchors, and maps subsequent
//! pointer positions to a new window rectangle. It owns no window state
//! beyond the active drag; the frame that embeds it applies the results.

use bitflags::bitflags;

use fenster_core::event::CursorShape;
use fenster_core::geometry::{Box2, Point, Size};

bitflags! {
    /// Active drag interaction bits.
    ///
    /// `MOVE` is mutually exclusive with the edge bits by classification
    /// policy, not by the type. Corner drags combine two edge bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DragMode: u8 {
        const MOVE   = 1;
        const TOP    = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT   = 1 << 3;
        const RIGHT  = 1 << 4;
    }
}

impl Default for DragMode {
    fn default() -> Self {
        Self::empty()
    }
}

/// Result of routing a pointer position through an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// The window moved; apply the new position, size unchanged.
    Moved(Point),
    /// The window was resized; apply position and requested size.
    Resized(Box2),
}

/// Classifies pointer-down positions and computes drag geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragResizeController {
    mode: DragMode,
    offset_top_left: Point,
    offset_bottom_right: Point,
}

impl DragResizeController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a widget-local pointer position into a drag mode.
    ///
    /// Edge bits win over `MOVE`: a position within `margin` of an edge
    /// returns that edge (only if `resizable`; the distance check is
    /// independent per axis, so corners combine both bits). Otherwise a
    /// position inside the header band (`y < header_height`) returns
    /// `MOVE`, and anything else returns the empty mode.
    #[must_use]
    pub fn classify(
        relative: Point,
        size: Size,
        resizable: bool,
        header_height: f32,
        margin: f32,
    ) -> DragMode {
        let mut mode = DragMode::empty();

        if resizable {
            if relative.y < margin {
                mode |= DragMode::TOP;
            } else if relative.y > size.height - margin {
                mode |= DragMode::BOTTOM;
            }

            if relative.x < margin {
                mode |= DragMode::LEFT;
            } else if relative.x > size.width - margin {
                mode |= DragMode::RIGHT;
            }
        }

        if mode.is_empty() && relative.y < header_height {
            mode = DragMode::MOVE;
        }

        mode
    }

    /// The active drag mode (empty when idle).
    #[inline]
    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Check if a drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !self.mode.is_empty()
    }

    /// Begin a drag, recording the two pointer anchors.
    ///
    /// The top-left anchor is the offset from the window origin to the
    /// pointer; the bottom-right anchor is the offset from the pointer to
    /// the window's bottom-right corner. Resizing moves each active edge to
    /// `pointer ± anchor`, which keeps the opposite edge pinned.
    pub fn begin_drag(&mut self, mode: DragMode, pointer_global: Point, position: Point, size: Size) {
        self.mode = mode;

        if !mode.is_empty() {
            self.offset_top_left = pointer_global - position;
            self.offset_bottom_right = (position + size) - pointer_global;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "fenster::drag", ?mode, "begin_drag");
    }

    /// Route a pointer position through the active drag.
    ///
    /// `committed` is the window rectangle the drag works against:
    /// position plus the explicitly requested size, falling back to the
    /// arranged size per unset axis. Returns `None` when no drag is active.
    #[must_use]
    pub fn update_drag(
        &self,
        pointer_global: Point,
        committed: Box2,
        min_size: Size,
        parent_size: Size,
    ) -> Option<DragUpdate> {
        if self.mode.is_empty() {
            return None;
        }

        if self.mode.contains(DragMode::MOVE) {
            let limit = (Point::new(parent_size.width, parent_size.height)
                - committed.size())
            .max(Point::ZERO);
            let position =
                (pointer_global - self.offset_top_left).clamp(Point::ZERO, limit);
            return Some(DragUpdate::Moved(position));
        }

        let mut rect = committed;

        if self.mode.contains(DragMode::TOP) {
            rect.top = (pointer_global.y - self.offset_top_left.y)
                .min(rect.bottom.min(rect.bottom - min_size.height));
        } else if self.mode.contains(DragMode::BOTTOM) {
            rect.bottom = (pointer_global.y + self.offset_bottom_right.y)
                .max(rect.top.max(rect.top + min_size.height));
        }

        if self.mode.contains(DragMode::LEFT) {
            rect.left = (pointer_global.x - self.offset_top_left.x)
                .min(rect.right.min(rect.right - min_size.width));
        } else if self.mode.contains(DragMode::RIGHT) {
            rect.right = (pointer_global.x + self.offset_bottom_right.x)
                .max(rect.left.max(rect.left + min_size.width));
        }

        Some(DragUpdate::Resized(rect))
    }

    /// End the drag and clear the anchors.
    ///
    /// Must be called on pointer-release regardless of where the release
    /// lands, so no drag is left dangling when the pointer leaves the
    /// widget.
    pub fn end_drag(&mut self) {
        #[cfg(feature = "tracing")]
        if !self.mode.is_empty() {
            tracing::debug!(target: "fenster::drag", mode = ?self.mode, "end_drag");
        }

        self.mode = DragMode::empty();
        self.offset_top_left = Point::ZERO;
        self.offset_bottom_right = Point::ZERO;
    }
}

/// The pointer cursor that previews a drag mode.
#[must_use]
pub fn cursor_for_mode(mode: DragMode) -> CursorShape {
    let vertical = mode.intersects(DragMode::TOP | DragMode::BOTTOM);
    let horizontal = mode.intersects(DragMode::LEFT | DragMode::RIGHT);

    match (vertical, horizontal) {
        (true, true) => CursorShape::ResizeDiagonal,
        (true, false) => CursorShape::ResizeVertical,
        (false, true) => CursorShape::ResizeHorizontal,
        (false, false) => CursorShape::Arrow,
    }
}
