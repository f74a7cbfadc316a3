#![forbid(unsafe_code)]

//! Floating window frame.
//!
//! [`WindowFrame`] composes a [`DragResizeController`] with the
//! open/close lifecycle, z-order operations, the close-button state
//! machine, and the per-frame screen-edge containment policy. It owns one
//! [`WindowState`] and nothing else: attaching, stacking, and focus live
//! behind the [`WindowHost`] collaborator the host passes into each
//! operation, so a frame is fully testable without a live UI tree.
//!
//! A frame has no children of its own. `measure` reports the desired
//! outer size and `arrange` returns the content rectangle (header band
//! and padding carved out) for the host to lay its content into.

use thiserror::Error;

use fenster_core::event::{
    CursorShape, EventStatus, PointerButton, PointerEvent, PointerEventKind,
};
use fenster_core::geometry::{Box2, Direction, Point, SetSize, Size};
use fenster_core::metrics::{TextMetrics, truncate_to_width};

use crate::drag::{DragMode, DragResizeController, DragUpdate, cursor_for_mode};

/// Precondition violations on window operations.
///
/// These indicate a host bug (operating on a window that is not open),
/// so they are reported rather than silently ignored.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// The window is not currently open.
    #[error("window is not currently open")]
    NotOpen,
}

/// Stacking, focus, and parent-geometry collaborator.
///
/// One handle per window; the host resolves which sibling list the
/// window lives in.
pub trait WindowHost {
    /// Extent of the parent area the window floats in.
    fn parent_size(&self) -> Size;

    /// Add the window to the root layer.
    fn attach(&mut self);

    /// Remove the window from the root layer.
    fn detach(&mut self);

    /// Reorder the window to be drawn and hit-tested last among its
    /// siblings.
    fn raise(&mut self);

    /// Check if any later sibling is visible.
    fn has_visible_sibling_above(&self) -> bool;

    /// Request a pointer cursor shape.
    fn set_cursor(&mut self, shape: CursorShape);

    /// Release keyboard focus held by the window's contents.
    fn release_focus(&mut self);
}

/// Model state of one floating window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    /// Top-left corner in parent-local units.
    pub position: Point,
    /// Arranged size.
    pub size: Size,
    /// Smallest size a resize drag may produce.
    pub min_size: Size,
    /// Explicitly requested size; unset axes follow the arranged size.
    pub set_size: SetSize,
    /// Whether edge drags resize the window.
    pub resizable: bool,
    /// Whether the window is attached to the root layer.
    pub is_open: bool,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            size: Size::ZERO,
            min_size: Size::new(150.0, 80.0),
            set_size: SetSize::UNSET,
            resizable: true,
            is_open: false,
        }
    }
}

/// Per-direction screen-edge containment policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct OffScreenPolicy {
    /// Directions in which the window may leave the visible area.
    pub allow: Direction,
    /// How far past an allowed edge the window may sit.
    pub edge_separation: f32,
    /// Extra margin recovered when an axis is already past the parent
    /// extent, so a parent resize cannot trap the window off-view.
    pub edge_bump: f32,
}

impl Default for OffScreenPolicy {
    fn default() -> Self {
        Self {
            allow: Direction::all() & !Direction::NORTH,
            edge_separation: 30.0,
            edge_bump: 50.0,
        }
    }
}

/// Fixed chrome geometry: header band, drag margins, close button,
/// content padding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowChrome {
    /// Height of the header band that drags the window.
    pub header_height: f32,
    /// Distance from an edge that classifies as a resize drag.
    pub drag_margin: f32,
    /// Side length of the close button.
    pub close_button_size: f32,
    /// Padding around the content rectangle.
    pub content_padding: f32,
    /// Smallest content area `measure` accounts for.
    pub content_min_size: Size,
}

impl Default for WindowChrome {
    fn default() -> Self {
        Self {
            header_height: 60.0,
            drag_margin: 7.0,
            close_button_size: 40.0,
            content_padding: 20.0,
            content_min_size: Size::new(100.0, 50.0),
        }
    }
}

type ClassifyFn = dyn Fn(Point, Size) -> DragMode;

/// A draggable, resizable, closable floating window model.
pub struct WindowFrame {
    state: WindowState,
    chrome: WindowChrome,
    policy: OffScreenPolicy,
    drag: DragResizeController,
    title: String,
    /// Desired size from the last measure pass.
    desired_size: Size,
    /// Desired size of the hosted content, fed in by the host before
    /// measuring.
    content_desired: Size,
    hovering_close: bool,
    pressing_close: bool,
    classifier: Option<Box<ClassifyFn>>,
    on_open: Vec<Box<dyn FnMut()>>,
    on_close: Vec<Box<dyn FnMut()>>,
}

impl Default for WindowFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowFrame {
    /// Create a closed window with default chrome and policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: WindowState::default(),
            chrome: WindowChrome::default(),
            policy: OffScreenPolicy::default(),
            drag: DragResizeController::new(),
            title: String::new(),
            desired_size: Size::ZERO,
            content_desired: Size::ZERO,
            hovering_close: false,
            pressing_close: false,
            classifier: None,
            on_open: Vec::new(),
            on_close: Vec::new(),
        }
    }

    // --- Builder methods ---

    /// Set the window title (builder).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the minimum size (builder).
    #[must_use]
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.state.min_size = min_size;
        self
    }

    /// Request an explicit size (builder).
    #[must_use]
    pub fn with_set_size(mut self, set_size: SetSize) -> Self {
        self.state.set_size = set_size;
        self
    }

    /// Set whether the window is resizable (builder).
    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.state.resizable = resizable;
        self
    }

    /// Set the containment policy (builder).
    #[must_use]
    pub fn with_policy(mut self, policy: OffScreenPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the chrome geometry (builder).
    #[must_use]
    pub fn with_chrome(mut self, chrome: WindowChrome) -> Self {
        self.chrome = chrome;
        self
    }

    // --- State access ---

    /// The window's model state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &WindowState {
        &self.state
    }

    /// Check if the window is open.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Current position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point {
        self.state.position
    }

    /// Move the window (host or application initiated).
    pub fn set_position(&mut self, position: Point) {
        self.state.position = position;
    }

    /// Current arranged size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        self.state.size
    }

    /// The window title.
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the window title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The title cut to the space left of the close button, with an
    /// ellipsis when it does not fit.
    #[must_use]
    pub fn truncated_title(&self, metrics: &dyn TextMetrics, scale: f32) -> String {
        let max_width = self.state.size.width - self.chrome.close_button_size - 20.0;
        truncate_to_width(&self.title, max_width.max(0.0), metrics, scale)
    }

    /// Replace the drag-mode classifier, for windows with custom hit
    /// regions. The function receives the widget-local position and the
    /// current size.
    pub fn set_classifier(&mut self, classifier: impl Fn(Point, Size) -> DragMode + 'static) {
        self.classifier = Some(Box::new(classifier));
    }

    /// Register an open listener; fires synchronously on each
    /// closed-to-open transition, in registration order.
    pub fn on_open(&mut self, listener: impl FnMut() + 'static) {
        self.on_open.push(Box::new(listener));
    }

    /// Register a close listener; fires synchronously on each
    /// open-to-closed transition, in registration order.
    pub fn on_close(&mut self, listener: impl FnMut() + 'static) {
        self.on_close.push(Box::new(listener));
    }

    // --- Lifecycle ---

    /// Open the window: attach to the root layer and notify listeners.
    ///
    /// Opening an already-open window only re-raises it; listeners fire
    /// on the actual transition.
    pub fn open(&mut self, host: &mut dyn WindowHost) {
        if self.state.is_open {
            host.raise();
            return;
        }

        host.attach();
        self.state.is_open = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "fenster::window", title = %self.title, "open");

        let mut listeners = std::mem::take(&mut self.on_open);
        for listener in listeners.iter_mut() {
            listener();
        }
        self.on_open = listeners;
    }

    /// Close the window: detach and notify listeners.
    ///
    /// A no-op on an already-closed window; the close notification fires
    /// exactly once per transition.
    pub fn close(&mut self, host: &mut dyn WindowHost) {
        if !self.state.is_open {
            return;
        }

        host.detach();
        self.state.is_open = false;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "fenster::window", title = %self.title, "close");

        let mut listeners = std::mem::take(&mut self.on_close);
        for listener in listeners.iter_mut() {
            listener();
        }
        self.on_close = listeners;
    }

    /// Measure, open, and center the window on `anchor` (each axis in
    /// `[0, 1]` of the parent area), clamped fully inside the parent.
    pub fn open_centered_at(&mut self, host: &mut dyn WindowHost, anchor: Point) {
        self.measure(Size::new(f32::INFINITY, f32::INFINITY));
        self.open(host);
        self.recenter(host, anchor);
    }

    /// Open centered in the parent area.
    pub fn open_centered(&mut self, host: &mut dyn WindowHost) {
        self.open_centered_at(host, Point::new(0.5, 0.5));
    }

    /// Open flush against the left edge, vertically centered.
    pub fn open_to_left(&mut self, host: &mut dyn WindowHost) {
        self.open_centered_at(host, Point::new(0.0, 0.5));
    }

    /// Open centered in the left half.
    pub fn open_centered_left(&mut self, host: &mut dyn WindowHost) {
        self.open_centered_at(host, Point::new(0.25, 0.5));
    }

    /// Open flush against the right edge, vertically centered.
    pub fn open_to_right(&mut self, host: &mut dyn WindowHost) {
        self.open_centered_at(host, Point::new(1.0, 0.5));
    }

    /// Open centered in the right half.
    pub fn open_centered_right(&mut self, host: &mut dyn WindowHost) {
        self.open_centered_at(host, Point::new(0.75, 0.5));
    }

    /// Re-position the open window so `anchor` of the parent area aligns
    /// with the window center, clamped inside the parent bounds.
    pub fn recenter(&mut self, host: &dyn WindowHost, anchor: Point) {
        if !self.state.is_open {
            return;
        }

        let parent = host.parent_size();
        let anchor = anchor.clamp(Point::ZERO, Point::new(1.0, 1.0));
        let desired = self.desired_size;

        let corner = Point::new(
            parent.width * anchor.x - desired.width / 2.0,
            parent.height * anchor.y - desired.height / 2.0,
        );
        let limit = (Point::new(parent.width, parent.height) - desired).max(Point::ZERO);
        self.state.position = corner.clamp(Point::ZERO, limit);
    }

    /// Reorder the window to the front of its sibling list.
    ///
    /// Fails with [`WindowError::NotOpen`] on a closed window.
    pub fn move_to_front(&self, host: &mut dyn WindowHost) -> Result<(), WindowError> {
        if !self.state.is_open {
            return Err(WindowError::NotOpen);
        }
        host.raise();
        Ok(())
    }

    /// Check if no later, visible sibling exists.
    ///
    /// Fails with [`WindowError::NotOpen`] on a closed window.
    pub fn is_at_front(&self, host: &dyn WindowHost) -> Result<bool, WindowError> {
        if !self.state.is_open {
            return Err(WindowError::NotOpen);
        }
        Ok(!host.has_visible_sibling_above())
    }

    // --- Layout ---

    /// Feed in the desired size of the hosted content before measuring.
    pub fn set_content_desired(&mut self, size: Size) {
        self.content_desired = size;
    }

    /// Compute the desired outer size.
    ///
    /// Floors at the chrome minimum (200 wide, header plus padded
    /// content), then applies the explicit size request, clamped into
    /// `available` but never below `min_size`.
    pub fn measure(&mut self, available: Size) -> Size {
        let chrome = &self.chrome;
        let content_min = chrome.content_min_size.max(self.content_desired);

        let min_width = 200f32.max(content_min.width + chrome.content_padding * 2.0);
        let min_height =
            chrome.header_height + content_min.height + chrome.content_padding * 2.0;

        let floor = Size::new(min_width, min_height).max(self.state.min_size);
        let requested = self.state.set_size.resolve(floor);

        self.desired_size = floor.max(requested).min(available).max(self.state.min_size);
        self.desired_size
    }

    /// Commit the arranged size and return the content rectangle
    /// (widget-local, header band and padding carved out).
    pub fn arrange(&mut self, final_size: Size) -> Box2 {
        self.state.size = final_size;
        self.content_rect()
    }

    /// The widget-local content rectangle at the current size.
    #[must_use]
    pub fn content_rect(&self) -> Box2 {
        let pad = self.chrome.content_padding;
        Box2::new(
            pad,
            self.chrome.header_height + pad,
            self.state.size.width - pad,
            self.state.size.height - pad,
        )
    }

    /// The widget-local close-button rectangle at the current size.
    ///
    /// Recomputed from the live size on every call; nothing cached
    /// survives a resize.
    #[must_use]
    pub fn close_button_rect(&self) -> Box2 {
        let side = self.chrome.close_button_size;
        let x = self.state.size.width - side - 5.0;
        let y = (self.chrome.header_height - side) / 2.0;
        Box2::new(x, y, x + side, y + side)
    }

    /// Check if the pointer is over the close button.
    #[inline]
    #[must_use]
    pub fn hovering_close(&self) -> bool {
        self.hovering_close
    }

    /// Check if the close button is held down.
    #[inline]
    #[must_use]
    pub fn pressing_close(&self) -> bool {
        self.pressing_close
    }

    // --- Pointer interaction ---

    /// Handle a primary-button press.
    ///
    /// A press on the close button arms it; anything else classifies into
    /// a drag and raises the window.
    pub fn on_pointer_down(
        &mut self,
        host: &mut dyn WindowHost,
        event: &PointerEvent,
    ) -> EventStatus {
        if !self.state.is_open {
            return EventStatus::Ignored;
        }
        let PointerEventKind::Down(PointerButton::Primary) = event.kind else {
            return EventStatus::Ignored;
        };

        if self.close_button_rect().contains(event.position) {
            self.pressing_close = true;
            return EventStatus::Redraw;
        }

        let mode = self.classify_at(event.position);
        if !mode.is_empty() {
            self.drag.begin_drag(
                mode,
                event.global_position,
                self.state.position,
                self.state.size,
            );
        }

        host.raise();
        EventStatus::Redraw
    }

    /// Handle a pointer move: close-button hover, active drag routing,
    /// or resize-cursor preview.
    pub fn on_pointer_move(
        &mut self,
        host: &mut dyn WindowHost,
        event: &PointerEvent,
    ) -> EventStatus {
        if !self.state.is_open {
            return EventStatus::Ignored;
        }

        let was_hovering = self.hovering_close;
        self.hovering_close = self.close_button_rect().contains(event.position);
        let mut status = if was_hovering != self.hovering_close {
            EventStatus::Redraw
        } else {
            EventStatus::Ignored
        };

        if self.drag.is_dragging() {
            match self.drag.update_drag(
                event.global_position,
                self.committed_rect(),
                self.state.min_size,
                host.parent_size(),
            ) {
                Some(DragUpdate::Moved(position)) => {
                    self.state.position = position;
                    status = status.merge(EventStatus::Relayout);
                }
                Some(DragUpdate::Resized(rect)) => {
                    self.state.position = rect.top_left();
                    self.state.set_size = rect.size().into();
                    status = status.merge(EventStatus::Relayout);
                }
                None => {}
            }
        } else if self.state.resizable {
            host.set_cursor(cursor_for_mode(self.classify_at(event.position)));
        }

        status
    }

    /// Handle a primary-button release: fire the close button if the
    /// release lands on it, then end any drag and release focus.
    ///
    /// Called wherever the release occurs; no drag outlives the pointer.
    pub fn on_pointer_up(
        &mut self,
        host: &mut dyn WindowHost,
        event: &PointerEvent,
    ) -> EventStatus {
        let PointerEventKind::Up(PointerButton::Primary) = event.kind else {
            return EventStatus::Ignored;
        };

        let mut status = EventStatus::Ignored;

        if self.pressing_close {
            self.pressing_close = false;
            status = EventStatus::Redraw;

            if self.close_button_rect().contains(event.position) {
                self.close(host);
                return EventStatus::Relayout;
            }
        }

        self.drag.end_drag();
        host.release_focus();
        status
    }

    /// Handle the pointer leaving the window: drop hover state and
    /// restore the arrow cursor unless a drag holds it.
    pub fn on_pointer_exit(&mut self, host: &mut dyn WindowHost) -> EventStatus {
        let status = if self.hovering_close {
            EventStatus::Redraw
        } else {
            EventStatus::Ignored
        };
        self.hovering_close = false;

        if self.state.resizable && !self.drag.is_dragging() {
            host.set_cursor(CursorShape::Arrow);
        }

        status
    }

    // --- Per-frame containment ---

    /// Clamp the window against the parent edges per the containment
    /// policy. Runs once per rendered frame while open; idempotent with
    /// zero elapsed time.
    pub fn on_frame_tick(&mut self, host: &dyn WindowHost, _dt: f32) -> EventStatus {
        if !self.state.is_open {
            return EventStatus::Ignored;
        }

        let parent = host.parent_size();
        let size = self.state.size;
        let policy = &self.policy;

        // Flag mapping is intentionally crosswise (WEST gates the max-x
        // limit, EAST the min-x, and likewise SOUTH/NORTH); shipped
        // layouts depend on it.
        let mut max_x = parent.width
            - if !policy.allow.contains(Direction::WEST) {
                size.width
            } else {
                policy.edge_separation
            };
        let mut max_y = parent.height
            - if !policy.allow.contains(Direction::SOUTH) {
                size.height
            } else {
                policy.edge_separation
            };

        if self.state.position.x > parent.width {
            max_x -= policy.edge_bump;
        }
        if self.state.position.y > parent.height {
            max_y -= policy.edge_bump;
        }

        let mut position = self.state.position.min(Point::new(max_x, max_y));

        let min_x = if !policy.allow.contains(Direction::EAST) {
            0.0
        } else {
            policy.edge_separation - size.width
        };
        let min_y = if !policy.allow.contains(Direction::NORTH) {
            0.0
        } else {
            policy.edge_separation - size.height
        };

        position = position.max(Point::new(min_x, min_y));

        if position != self.state.position {
            self.state.position = position;
            EventStatus::Relayout
        } else {
            EventStatus::Ignored
        }
    }

    // --- Internal helpers ---

    fn classify_at(&self, relative: Point) -> DragMode {
        if let Some(classifier) = &self.classifier {
            return classifier(relative, self.state.size);
        }

        if self.close_button_rect().contains(relative) {
            return DragMode::empty();
        }

        DragResizeController::classify(
            relative,
            self.state.size,
            self.state.resizable,
            self.chrome.header_height,
            self.chrome.drag_margin,
        )
    }

    /// The rectangle a resize drag works against: position plus the
    /// explicit size request, falling back to the arranged size per
    /// unset axis.
    fn committed_rect(&self) -> Box2 {
        let size = self.state.set_size.resolve(self.state.size);
        Box2::from_pos_size(self.state.position, size)
    }
}
