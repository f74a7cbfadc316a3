#![forbid(unsafe_code)]

//! Vertical scrollbar model.
//!
//! [`ScrollbarModel`] owns the scroll offset, the content/viewport extents,
//! and the thumb geometry and drag state for one vertical scroll region.
//! The host re-runs [`ScrollbarModel::layout`] on every layout pass and
//! feeds pointer positions in track-local units (0 at the top of the
//! track). The model never draws; [`ScrollbarModel::thumb_span`] gives the
//! renderer everything it needs.

use fenster_core::geometry::Point;

/// Smallest thumb length, so tiny thumbs stay draggable.
pub const MIN_THUMB_LENGTH: f32 = 30.0;

/// Offset units scrolled per wheel notch.
pub const WHEEL_STEP: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
struct ThumbDrag {
    start_pointer: f32,
    start_offset: f32,
}

/// Scroll state and thumb geometry for a vertical scroll region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarModel {
    offset: f32,
    max_offset: f32,
    viewport_extent: f32,
    content_extent: f32,
    drag: Option<ThumbDrag>,
    hovering: bool,
}

impl ScrollbarModel {
    /// Create a model with no content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Largest valid offset: `max(0, content − viewport)`.
    #[inline]
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// Extent of the visible region.
    #[inline]
    #[must_use]
    pub fn viewport_extent(&self) -> f32 {
        self.viewport_extent
    }

    /// Extent of the scrolled content.
    #[inline]
    #[must_use]
    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    /// Check if there is anything to scroll.
    #[inline]
    #[must_use]
    pub fn scrollable(&self) -> bool {
        self.max_offset > 0.0
    }

    /// Recompute extents after a layout pass, clamping the offset back
    /// into range.
    pub fn layout(&mut self, content_extent: f32, viewport_extent: f32) {
        self.content_extent = content_extent.max(0.0);
        self.viewport_extent = viewport_extent.max(0.0);
        self.max_offset = (self.content_extent - self.viewport_extent).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Scroll by `delta` offset units, clamped into `[0, max_offset]`.
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        let next = (self.offset + delta).clamp(0.0, self.max_offset);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Handle a wheel notch; positive `delta` scrolls the content up.
    ///
    /// Returns `true` if the offset changed.
    pub fn on_wheel(&mut self, delta: f32) -> bool {
        if !self.scrollable() {
            return false;
        }
        self.scroll_by(-delta * WHEEL_STEP)
    }

    /// Thumb length along the track.
    ///
    /// Proportional to `viewport / content`, capped at the viewport extent
    /// and floored at [`MIN_THUMB_LENGTH`]. When nothing scrolls, the thumb
    /// fills the whole track.
    #[must_use]
    pub fn thumb_length(&self) -> f32 {
        if !self.scrollable() || self.viewport_extent <= 0.0 {
            return self.viewport_extent;
        }

        let ratio = self.viewport_extent / self.content_extent.max(1.0);
        (self.viewport_extent * ratio).clamp(
            MIN_THUMB_LENGTH.min(self.viewport_extent),
            self.viewport_extent,
        )
    }

    /// Track-local position of the thumb's leading edge.
    #[must_use]
    pub fn thumb_offset(&self) -> f32 {
        if !self.scrollable() {
            return 0.0;
        }
        let track = (self.viewport_extent - self.thumb_length()).max(1.0);
        self.offset / self.max_offset * track
    }

    /// Thumb geometry as `(leading edge, length)` in track-local units.
    #[must_use]
    pub fn thumb_span(&self) -> (f32, f32) {
        (self.thumb_offset(), self.thumb_length())
    }

    /// Check if a track-local pointer position lands on the thumb.
    ///
    /// The host uses this on pointer-down to decide between a thumb drag
    /// and a page click.
    #[must_use]
    pub fn hit_test_thumb(&self, pointer: Point) -> bool {
        let (start, length) = self.thumb_span();
        pointer.y >= start && pointer.y < start + length
    }

    /// Begin a thumb drag at the given track-local pointer y.
    pub fn begin_thumb_drag(&mut self, pointer_y: f32) {
        self.drag = Some(ThumbDrag {
            start_pointer: pointer_y,
            start_offset: self.offset,
        });
    }

    /// Route a pointer move through an active thumb drag.
    ///
    /// The pointer delta maps to an offset delta via
    /// `max_offset / (track − thumb)`. Returns `true` if the offset
    /// changed.
    pub fn drag_thumb(&mut self, pointer_y: f32) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        if !self.scrollable() {
            return false;
        }

        let track = (self.viewport_extent - self.thumb_length()).max(1.0);
        let delta = (pointer_y - drag.start_pointer) / track * self.max_offset;
        let next = (drag.start_offset + delta).clamp(0.0, self.max_offset);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// End the thumb drag, wherever the release lands.
    pub fn end_thumb_drag(&mut self) {
        self.drag = None;
    }

    /// Check if a thumb drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_thumb_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Page on a track click: before the thumb center scrolls back half a
    /// viewport, after it scrolls forward half a viewport.
    ///
    /// Returns `true` if the offset changed.
    pub fn page_click(&mut self, pointer_y: f32) -> bool {
        let (start, length) = self.thumb_span();
        let center = start + length / 2.0;

        if pointer_y < center {
            self.scroll_by(-self.viewport_extent * 0.5)
        } else {
            self.scroll_by(self.viewport_extent * 0.5)
        }
    }

    /// Record whether the pointer is over the track, for host feedback.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Check if the pointer is over the track.
    #[inline]
    #[must_use]
    pub fn hovering(&self) -> bool {
        self.hovering
    }
}

#[cfg(test)]
mod tests {
    use super::{MIN_THUMB_LENGTH, ScrollbarModel, WHEEL_STEP};
    use fenster_core::geometry::Point;

    fn model(content: f32, viewport: f32) -> ScrollbarModel {
        let mut m = ScrollbarModel::new();
        m.layout(content, viewport);
        m
    }

    #[test]
    fn layout_and_scroll_by_clamp() {
        let mut m = model(1000.0, 200.0);
        assert_eq!(m.max_offset(), 800.0);

        assert!(m.scroll_by(50.0));
        assert_eq!(m.offset(), 50.0);

        assert!(m.scroll_by(-1000.0));
        assert_eq!(m.offset(), 0.0);

        assert!(!m.scroll_by(-10.0));
    }

    #[test]
    fn relayout_clamps_existing_offset() {
        let mut m = model(1000.0, 200.0);
        m.scroll_by(800.0);
        assert_eq!(m.offset(), 800.0);

        // Content shrinks below the old offset.
        m.layout(300.0, 200.0);
        assert_eq!(m.max_offset(), 100.0);
        assert_eq!(m.offset(), 100.0);
    }

    #[test]
    fn thumb_fills_track_when_nothing_scrolls() {
        let m = model(150.0, 200.0);
        assert_eq!(m.max_offset(), 0.0);
        assert_eq!(m.thumb_length(), 200.0);
        assert_eq!(m.thumb_offset(), 0.0);
    }

    #[test]
    fn thumb_length_proportional_with_floor() {
        let m = model(400.0, 200.0);
        assert_eq!(m.thumb_length(), 100.0);

        // Huge content: proportional length would be tiny, floor kicks in.
        let m = model(100_000.0, 200.0);
        assert_eq!(m.thumb_length(), MIN_THUMB_LENGTH);
    }

    #[test]
    fn thumb_drag_maps_track_to_offset() {
        let mut m = model(1000.0, 200.0);
        let track = 200.0 - m.thumb_length();

        m.begin_thumb_drag(50.0);
        assert!(m.is_thumb_dragging());

        // Dragging the full remaining track reaches max offset.
        assert!(m.drag_thumb(50.0 + track));
        assert_eq!(m.offset(), 800.0);

        // Back to the start position restores the start offset.
        assert!(m.drag_thumb(50.0));
        assert_eq!(m.offset(), 0.0);

        m.end_thumb_drag();
        assert!(!m.drag_thumb(500.0));
    }

    #[test]
    fn page_click_pivots_on_thumb_center() {
        let mut m = model(1000.0, 200.0);
        m.scroll_by(400.0);

        let (start, length) = m.thumb_span();
        let center = start + length / 2.0;

        assert!(m.page_click(center + 1.0));
        assert_eq!(m.offset(), 500.0);

        let (start, length) = m.thumb_span();
        assert!(m.page_click(start + length / 2.0 - 1.0));
        assert_eq!(m.offset(), 400.0);
    }

    #[test]
    fn wheel_scrolls_in_steps_and_clamps() {
        let mut m = model(1000.0, 200.0);
        assert!(m.on_wheel(-1.0));
        assert_eq!(m.offset(), WHEEL_STEP);

        assert!(m.on_wheel(100.0));
        assert_eq!(m.offset(), 0.0);

        // Nothing to scroll: wheel is ignored.
        let mut m = model(100.0, 200.0);
        assert!(!m.on_wheel(-1.0));
    }

    #[test]
    fn thumb_hit_test() {
        let mut m = model(1000.0, 200.0);
        m.scroll_by(400.0);
        let (start, length) = m.thumb_span();

        assert!(m.hit_test_thumb(Point::new(0.0, start + 1.0)));
        assert!(!m.hit_test_thumb(Point::new(0.0, start - 1.0)));
        assert!(!m.hit_test_thumb(Point::new(0.0, start + length + 1.0)));
    }
}
