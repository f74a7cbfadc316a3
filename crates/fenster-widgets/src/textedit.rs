#![forbid(unsafe_code)]

//! Single-line text editing model.
//!
//! [`TextEditBuffer`] owns the text content, the cursor/selection indices,
//! and the horizontal scroll offset that keeps the cursor visible. It is
//! pure logic: rendering, focus, and keybinding resolution stay with the
//! host, which talks to the buffer through [`fenster_core::TextMetrics`]
//! and the [`Clipboard`] collaborator.
//!
//! Indices count Unicode scalar values, the same unit insertion and
//! removal use, so `0 ≤ cursor, anchor ≤ char_count(text)` always holds.

use fenster_core::event::{KeyCommand, Modifiers};
use fenster_core::metrics::TextMetrics;

/// Cursor blink period in seconds: half solid, half fading out.
pub const BLINK_PERIOD: f32 = 1.3;

/// Host clipboard collaborator.
///
/// `request_text` models the asynchronous read: the host resolves it
/// whenever the platform answers and feeds the result back through
/// [`TextEditBuffer::complete_paste`]. A stale completion is applied at
/// the cursor position current at completion time.
pub trait Clipboard {
    /// Store `text` as the clipboard content.
    fn set_text(&mut self, text: &str);

    /// Kick off an asynchronous clipboard read.
    fn request_text(&mut self);
}

/// A cursor motion for [`TextEditBuffer::move_cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// To index 0.
    Start,
    /// To the end of the text.
    End,
    /// One character left.
    Left,
    /// One character right.
    Right,
}

/// Frame-tick driven cursor blink phase.
///
/// Solid for the first half of [`BLINK_PERIOD`], then fading linearly to
/// zero. Ticking with zero elapsed time is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorBlink {
    timer: f32,
}

impl CursorBlink {
    /// Restart the blink cycle (cursor fully visible).
    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    /// Advance the cycle by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.timer = (self.timer + dt) % BLINK_PERIOD;
    }

    /// Current cursor opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        let half = BLINK_PERIOD / 2.0;
        if self.timer < half {
            1.0
        } else {
            1.0 - (self.timer - half) / half
        }
    }
}

/// Text content, cursor/selection, and horizontal scroll for a
/// single-line input.
#[derive(Default)]
pub struct TextEditBuffer {
    text: String,
    /// Cursor position (char index).
    cursor: usize,
    /// Selection anchor (char index); selection is empty when equal to
    /// the cursor.
    anchor: usize,
    /// Horizontal scroll offset in pixels.
    scroll_offset: f32,
    placeholder: String,
    blink: CursorBlink,
    pointer_selecting: bool,
    last_pointer_x: f32,
    on_change: Vec<Box<dyn FnMut(&str)>>,
}

impl TextEditBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial text (builder); cursor lands at the end.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.cursor = self.char_count();
        self.anchor = self.cursor;
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    // --- Content access ---

    /// The current text.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, clamping cursor and anchor into the new range.
    ///
    /// Does not fire the text-changed notification; this is the host
    /// pushing state in, not the user editing.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let max = self.char_count();
        self.cursor = self.cursor.min(max);
        self.anchor = self.anchor.min(max);
    }

    /// The placeholder shown while the text is empty.
    #[inline]
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// What the renderer shows: the text, or the placeholder while empty.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            &self.placeholder
        } else {
            &self.text
        }
    }

    /// Check if the text is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position (char index).
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selection anchor (char index).
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Selection as a half-open `(start, end)` char range; empty when
    /// `start == end`.
    #[must_use]
    pub fn selection(&self) -> (usize, usize) {
        if self.anchor <= self.cursor {
            (self.anchor, self.cursor)
        } else {
            (self.cursor, self.anchor)
        }
    }

    /// Check if the selection is non-empty.
    #[inline]
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.anchor != self.cursor
    }

    /// The selected substring, if any.
    #[must_use]
    pub fn selected_text(&self) -> Option<&str> {
        if !self.has_selection() {
            return None;
        }
        let (start, end) = self.selection();
        Some(&self.text[self.byte_offset(start)..self.byte_offset(end)])
    }

    /// Current horizontal scroll offset in pixels.
    #[inline]
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Cursor blink phase for the renderer.
    #[inline]
    #[must_use]
    pub fn blink(&self) -> &CursorBlink {
        &self.blink
    }

    /// Register a text-changed listener; listeners fire synchronously, in
    /// registration order, after every edit.
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.on_change.push(Box::new(listener));
    }

    // --- Editing operations ---

    /// Insert text at the cursor, replacing any selection.
    ///
    /// Carriage returns and line feeds are filtered out (single-line
    /// only). Cursor and anchor land after the inserted text. Fires the
    /// text-changed notification.
    pub fn insert(&mut self, text: &str) {
        let filtered: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();

        let (start, end) = self.selection();
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.text.replace_range(byte_start..byte_end, &filtered);

        let landing = start + filtered.chars().count();
        self.cursor = landing;
        self.anchor = landing;

        #[cfg(feature = "tracing")]
        self.trace_edit("insert");
        self.emit_changed();
    }

    /// Remove the selection, or the character before the cursor.
    ///
    /// No-op at the start of the buffer. Returns `true` if the text
    /// changed (and the notification fired).
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            #[cfg(feature = "tracing")]
            self.trace_edit("delete_backward");
            self.emit_changed();
            return true;
        }

        if self.cursor == 0 {
            return false;
        }

        let byte_start = self.byte_offset(self.cursor - 1);
        let byte_end = self.byte_offset(self.cursor);
        self.text.drain(byte_start..byte_end);
        self.cursor -= 1;
        self.anchor = self.cursor;

        #[cfg(feature = "tracing")]
        self.trace_edit("delete_backward");
        self.emit_changed();
        true
    }

    /// Remove the selection, or the character after the cursor.
    ///
    /// No-op at the end of the buffer. Returns `true` if the text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            #[cfg(feature = "tracing")]
            self.trace_edit("delete_forward");
            self.emit_changed();
            return true;
        }

        if self.cursor >= self.char_count() {
            return false;
        }

        let byte_start = self.byte_offset(self.cursor);
        let byte_end = self.byte_offset(self.cursor + 1);
        self.text.drain(byte_start..byte_end);

        #[cfg(feature = "tracing")]
        self.trace_edit("delete_forward");
        self.emit_changed();
        true
    }

    /// Move the cursor.
    ///
    /// `Left`/`Right` are no-ops at the respective boundary. When `extend`
    /// is false the anchor snaps to the new cursor, collapsing the
    /// selection. Returns `true` if cursor or anchor changed.
    pub fn move_cursor(&mut self, motion: Motion, extend: bool) -> bool {
        let before = (self.cursor, self.anchor);

        match motion {
            Motion::Start => self.cursor = 0,
            Motion::End => self.cursor = self.char_count(),
            Motion::Left => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
            }
            Motion::Right => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                self.cursor += 1;
            }
        }

        if !extend {
            self.anchor = self.cursor;
        }

        (self.cursor, self.anchor) != before
    }

    /// Select the entire text.
    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.cursor = self.char_count();
    }

    // --- Clipboard ---

    /// Copy the selection to the clipboard. No-op without a selection.
    pub fn copy_selection(&self, clipboard: &mut dyn Clipboard) {
        if let Some(selected) = self.selected_text() {
            clipboard.set_text(selected);
        }
    }

    /// Cut the selection to the clipboard.
    ///
    /// Returns `true` if text was removed (and the notification fired).
    pub fn cut_selection(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let Some(selected) = self.selected_text() else {
            return false;
        };
        clipboard.set_text(selected);

        self.delete_selection();
        #[cfg(feature = "tracing")]
        self.trace_edit("cut");
        self.emit_changed();
        true
    }

    /// Deliver the text of a previously requested paste.
    ///
    /// Applied at the *current* cursor/selection, even if the buffer
    /// changed since the request; newlines are filtered like any insert.
    pub fn complete_paste(&mut self, text: &str) {
        self.insert(text);
    }

    /// Dispatch a bound editing command.
    ///
    /// SHIFT extends the selection for cursor motions. Returns `true` if
    /// buffer state changed.
    pub fn handle_command(
        &mut self,
        command: KeyCommand,
        modifiers: Modifiers,
        clipboard: &mut dyn Clipboard,
    ) -> bool {
        let extend = modifiers.contains(Modifiers::SHIFT);

        let changed = match command {
            KeyCommand::DeleteBackward => self.delete_backward(),
            KeyCommand::DeleteForward => self.delete_forward(),
            KeyCommand::CursorLeft => self.move_cursor(Motion::Left, extend),
            KeyCommand::CursorRight => self.move_cursor(Motion::Right, extend),
            KeyCommand::CursorStart => self.move_cursor(Motion::Start, extend),
            KeyCommand::CursorEnd => self.move_cursor(Motion::End, extend),
            KeyCommand::SelectAll => {
                self.select_all();
                true
            }
            KeyCommand::Copy => {
                self.copy_selection(clipboard);
                false
            }
            KeyCommand::Cut => self.cut_selection(clipboard),
            KeyCommand::Paste => {
                clipboard.request_text();
                false
            }
        };

        self.blink.reset();
        changed
    }

    // --- Geometry ---

    /// Map a content-local pixel position to the nearest character
    /// boundary index.
    ///
    /// Walks advance widths minus the active scroll offset; when the
    /// position is closer to a character's start than its end, the index
    /// breaks toward the left boundary. Characters without metrics are
    /// skipped as zero-width.
    #[must_use]
    pub fn hit_test(&self, x: f32, metrics: &dyn TextMetrics, scale: f32) -> usize {
        let mut index = 0usize;
        let mut char_x = -self.scroll_offset;
        let mut last_char_x = char_x;

        for ch in self.text.chars() {
            let Some(advance) = metrics.advance_width(ch, scale) else {
                index += 1;
                continue;
            };

            if char_x > x {
                break;
            }

            last_char_x = char_x;
            char_x += advance;
            index += 1;
        }

        let distance_right = char_x - x;
        let distance_left = x - last_char_x;

        if index > 0 && distance_right > distance_left {
            index -= 1;
        }

        index
    }

    /// Cursor position in content-local pixels (scroll already applied).
    #[must_use]
    pub fn cursor_pixel_x(&self, metrics: &dyn TextMetrics, scale: f32) -> f32 {
        self.width_to(self.cursor, metrics, scale) - self.scroll_offset
    }

    /// Selection bounds in content-local pixels, if a selection exists.
    #[must_use]
    pub fn selection_pixel_span(
        &self,
        metrics: &dyn TextMetrics,
        scale: f32,
    ) -> Option<(f32, f32)> {
        if !self.has_selection() {
            return None;
        }
        let (start, end) = self.selection();
        Some((
            self.width_to(start, metrics, scale) - self.scroll_offset,
            self.width_to(end, metrics, scale) - self.scroll_offset,
        ))
    }

    /// Re-align the scroll offset so the cursor stays visible.
    ///
    /// Called by the host whenever the visible width is known (typically
    /// right before drawing). A cursor left of the window pulls the
    /// offset back; a cursor past the right edge pushes it forward; text
    /// narrower than the window pulls the offset toward zero so no
    /// trailing blank space is shown unnecessarily.
    pub fn sync_scroll(&mut self, visible_width: f32, metrics: &dyn TextMetrics, scale: f32) {
        let total = self.width_to(self.char_count(), metrics, scale);
        let cursor_px = self.width_to(self.cursor, metrics, scale);

        let end = total - self.scroll_offset;
        if end + 1.0 < visible_width {
            self.scroll_offset = (self.scroll_offset - (visible_width - end)).max(0.0);
        }

        if cursor_px < self.scroll_offset {
            self.scroll_offset = cursor_px;
        } else if cursor_px >= visible_width + self.scroll_offset {
            self.scroll_offset = cursor_px - (visible_width - 1.0);
        }
    }

    // --- Pointer interaction ---

    /// Pointer-down at a content-local x: place cursor and anchor, start
    /// drag-selection tracking.
    pub fn on_pointer_down(&mut self, x: f32, metrics: &dyn TextMetrics, scale: f32) {
        let index = self.hit_test(x, metrics, scale);
        self.cursor = index;
        self.anchor = index;
        self.pointer_selecting = true;
        self.last_pointer_x = x;
        self.blink.reset();
    }

    /// Track the pointer while it moves over the field.
    pub fn on_pointer_move(&mut self, x: f32) {
        self.last_pointer_x = x;
    }

    /// Pointer released; drag-selection stops.
    pub fn on_pointer_up(&mut self) {
        self.pointer_selecting = false;
    }

    /// Per-frame update: advances the blink phase and, while the pointer
    /// is held down, extends the selection toward the last pointer
    /// position (clamped into the visible width).
    ///
    /// Idempotent when invoked with zero elapsed time. Returns `true` if
    /// the cursor moved.
    pub fn on_frame_tick(
        &mut self,
        dt: f32,
        visible_width: f32,
        metrics: &dyn TextMetrics,
        scale: f32,
    ) -> bool {
        self.blink.tick(dt);

        if !self.pointer_selecting {
            return false;
        }

        let x = self.last_pointer_x.clamp(0.0, visible_width);
        let index = self.hit_test(x, metrics, scale);
        if index != self.cursor {
            self.cursor = index;
            return true;
        }
        false
    }

    // --- Internal helpers ---

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn width_to(&self, char_idx: usize, metrics: &dyn TextMetrics, scale: f32) -> f32 {
        self.text
            .chars()
            .take(char_idx)
            .filter_map(|ch| metrics.advance_width(ch, scale))
            .sum()
    }

    /// Remove the selected range; cursor and anchor land at its start.
    fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }

        let (start, end) = self.selection();
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.text.drain(byte_start..byte_end);
        self.cursor = start;
        self.anchor = start;
        true
    }

    fn emit_changed(&mut self) {
        let mut listeners = std::mem::take(&mut self.on_change);
        for listener in listeners.iter_mut() {
            listener(&self.text);
        }
        self.on_change = listeners;
    }

    #[cfg(feature = "tracing")]
    fn trace_edit(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "textedit.edit",
            operation,
            cursor = self.cursor,
            char_count = self.char_count(),
            has_selection = self.has_selection()
        )
        .entered();
    }
}

#[cfg(test)]
mod tests {
    use super::{BLINK_PERIOD, Clipboard, Motion, TextEditBuffer};
    use fenster_core::event::{KeyCommand, Modifiers};
    use fenster_core::metrics::MonospaceMetrics;
    use std::cell::RefCell;
    use std::rc::Rc;

    const M: MonospaceMetrics = MonospaceMetrics::new(10.0, 16.0);

    #[derive(Default)]
    struct FakeClipboard {
        content: String,
        requests: usize,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) {
            self.content = text.to_string();
        }

        fn request_text(&mut self) {
            self.requests += 1;
        }
    }

    #[test]
    fn insert_moves_cursor_past_inserted_text() {
        let mut buf = TextEditBuffer::new();
        buf.insert("hello");
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.cursor(), 5);
        assert!(!buf.has_selection());
    }

    #[test]
    fn insert_filters_newlines() {
        let mut buf = TextEditBuffer::new();
        buf.insert("a\r\nb\nc");
        assert_eq!(buf.text(), "abc");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn insert_replaces_selection() {
        let mut buf = TextEditBuffer::new().with_text("hello world");
        buf.move_cursor(Motion::Start, false);
        for _ in 0..5 {
            buf.move_cursor(Motion::Right, true);
        }
        buf.insert("goodbye");
        assert_eq!(buf.text(), "goodbye world");
        assert_eq!(buf.cursor(), 7);
    }

    #[test]
    fn insert_then_backspace_round_trips() {
        let mut buf = TextEditBuffer::new().with_text("base");
        let inserted = "mörtel";
        buf.insert(inserted);
        for _ in 0..inserted.chars().count() {
            assert!(buf.delete_backward());
        }
        assert_eq!(buf.text(), "base");
        assert_eq!(buf.cursor(), 4);
    }

    #[test]
    fn delete_at_boundaries_is_noop() {
        let mut buf = TextEditBuffer::new().with_text("ab");
        assert!(!buf.delete_forward());
        buf.move_cursor(Motion::Start, false);
        assert!(!buf.delete_backward());
        assert_eq!(buf.text(), "ab");
    }

    #[test]
    fn selection_scenario_from_scratch() {
        let mut buf = TextEditBuffer::new();
        buf.insert("hello");
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.cursor(), 5);

        for _ in 0..5 {
            buf.move_cursor(Motion::Left, false);
        }
        assert_eq!(buf.cursor(), 0);
        assert!(!buf.has_selection());

        for _ in 0..3 {
            buf.move_cursor(Motion::Right, true);
        }
        assert_eq!(buf.selection(), (0, 3));
        assert_eq!(buf.selected_text(), Some("hel"));
    }

    #[test]
    fn move_left_at_start_keeps_selection() {
        let mut buf = TextEditBuffer::new().with_text("abc");
        buf.move_cursor(Motion::Start, false);
        buf.move_cursor(Motion::Right, true);
        buf.move_cursor(Motion::Left, true);
        // Cursor back at 0 with an empty selection; another left is a no-op.
        assert!(!buf.move_cursor(Motion::Left, true));
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn select_all_spans_everything() {
        let mut buf = TextEditBuffer::new().with_text("abc");
        buf.select_all();
        assert_eq!(buf.selection(), (0, 3));
        assert_eq!(buf.selected_text(), Some("abc"));
    }

    #[test]
    fn copy_and_cut_delegate_to_clipboard() {
        let mut buf = TextEditBuffer::new().with_text("hello");
        let mut clip = FakeClipboard::default();

        buf.select_all();
        buf.copy_selection(&mut clip);
        assert_eq!(clip.content, "hello");
        assert_eq!(buf.text(), "hello");

        assert!(buf.cut_selection(&mut clip));
        assert_eq!(clip.content, "hello");
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor(), 0);

        // Without a selection both are no-ops.
        assert!(!buf.cut_selection(&mut clip));
    }

    #[test]
    fn paste_completion_applies_at_current_cursor() {
        let mut buf = TextEditBuffer::new().with_text("abc");
        let mut clip = FakeClipboard::default();

        buf.handle_command(KeyCommand::Paste, Modifiers::NONE, &mut clip);
        assert_eq!(clip.requests, 1);

        // The buffer changes before the clipboard answers.
        buf.move_cursor(Motion::Start, false);
        buf.complete_paste("XY");
        assert_eq!(buf.text(), "XYabc");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn change_listener_fires_in_order() {
        let log: Rc<RefCell<Vec<String>>> = Rc::default();
        let mut buf = TextEditBuffer::new();

        let log_a = Rc::clone(&log);
        buf.on_change(move |text| log_a.borrow_mut().push(format!("a:{text}")));
        let log_b = Rc::clone(&log);
        buf.on_change(move |text| log_b.borrow_mut().push(format!("b:{text}")));

        buf.insert("x");
        buf.delete_backward();

        assert_eq!(*log.borrow(), ["a:x", "b:x", "a:", "b:"]);
    }

    #[test]
    fn hit_test_breaks_ties_toward_left_boundary() {
        let buf = TextEditBuffer::new().with_text("abcd");

        // 10-unit cells: 12.0 is inside 'b', closer to its start.
        assert_eq!(buf.hit_test(12.0, &M, 1.0), 1);
        // 18.0 is inside 'b', closer to its end.
        assert_eq!(buf.hit_test(18.0, &M, 1.0), 2);
        // Far left and far right clamp to the boundaries.
        assert_eq!(buf.hit_test(-5.0, &M, 1.0), 0);
        assert_eq!(buf.hit_test(500.0, &M, 1.0), 4);
    }

    #[test]
    fn hit_test_accounts_for_scroll_offset() {
        let mut buf = TextEditBuffer::new().with_text("abcdefghij");
        // Cursor at end, window of 50px: offset pushes past the first chars.
        buf.sync_scroll(50.0, &M, 1.0);
        assert!(buf.scroll_offset() > 0.0);

        let index = buf.hit_test(1.0, &M, 1.0);
        assert!(index > 0, "leftmost visible boundary is scrolled in");
    }

    #[test]
    fn sync_scroll_keeps_cursor_visible() {
        let mut buf = TextEditBuffer::new().with_text("abcdefghij");
        // 100px of text in a 50px window, cursor at the end.
        buf.sync_scroll(50.0, &M, 1.0);
        let cursor_px = buf.cursor_pixel_x(&M, 1.0);
        assert!(cursor_px >= 0.0 && cursor_px < 50.0);

        // Cursor back to the start: offset must follow.
        buf.move_cursor(Motion::Start, false);
        buf.sync_scroll(50.0, &M, 1.0);
        assert_eq!(buf.scroll_offset(), 0.0);
    }

    #[test]
    fn sync_scroll_pulls_back_after_shrink() {
        let mut buf = TextEditBuffer::new().with_text("abcdefghij");
        buf.sync_scroll(50.0, &M, 1.0);
        assert!(buf.scroll_offset() > 0.0);

        // Delete most of the text; the window is wider than what's left.
        buf.select_all();
        buf.insert("ab");
        buf.sync_scroll(50.0, &M, 1.0);
        assert_eq!(buf.scroll_offset(), 0.0);
    }

    #[test]
    fn pointer_drag_extends_selection_on_tick() {
        let mut buf = TextEditBuffer::new().with_text("abcdef");

        buf.on_pointer_down(1.0, &M, 1.0);
        assert_eq!(buf.cursor(), 0);

        buf.on_pointer_move(34.0);
        assert!(buf.on_frame_tick(0.016, 60.0, &M, 1.0));
        assert_eq!(buf.selection(), (0, 3));

        buf.on_pointer_up();
        buf.on_pointer_move(55.0);
        assert!(!buf.on_frame_tick(0.016, 60.0, &M, 1.0));
        assert_eq!(buf.selection(), (0, 3));
    }

    #[test]
    fn blink_phase_is_idempotent_at_zero_dt() {
        let mut buf = TextEditBuffer::new();
        buf.on_frame_tick(BLINK_PERIOD * 0.75, 100.0, &M, 1.0);
        let opacity = buf.blink().opacity();
        buf.on_frame_tick(0.0, 100.0, &M, 1.0);
        assert_eq!(buf.blink().opacity(), opacity);
        assert!(opacity < 1.0);
    }

    #[test]
    fn placeholder_shows_only_while_empty() {
        let mut buf = TextEditBuffer::new().with_placeholder("SEARCH...");
        assert_eq!(buf.display_text(), "SEARCH...");
        buf.insert("q");
        assert_eq!(buf.display_text(), "q");
    }

    #[test]
    fn set_text_clamps_indices() {
        let mut buf = TextEditBuffer::new().with_text("hello world");
        buf.select_all();
        buf.set_text("hi");
        assert!(buf.cursor() <= 2);
        assert!(buf.anchor() <= 2);
    }

    #[test]
    fn shift_command_extends_selection() {
        let mut buf = TextEditBuffer::new().with_text("abc");
        let mut clip = FakeClipboard::default();

        buf.handle_command(KeyCommand::CursorStart, Modifiers::NONE, &mut clip);
        buf.handle_command(KeyCommand::CursorRight, Modifiers::SHIFT, &mut clip);
        buf.handle_command(KeyCommand::CursorRight, Modifiers::SHIFT, &mut clip);
        assert_eq!(buf.selection(), (0, 2));

        // Unshifted motion collapses.
        buf.handle_command(KeyCommand::CursorRight, Modifiers::NONE, &mut clip);
        assert!(!buf.has_selection());
    }
}
