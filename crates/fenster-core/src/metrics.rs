#![forbid(unsafe_code)]

//! Text metrics collaborator.
//!
//! Widgets never rasterize text; they only need advance widths to map
//! between character indices and horizontal pixel positions. The host
//! supplies an implementation backed by its font stack. Characters the
//! provider has no entry for are treated as zero-width and skipped, so a
//! missing glyph never fails a measure pass.

use unicode_width::UnicodeWidthChar;

/// Per-character advance metrics at a given scale.
pub trait TextMetrics {
    /// Advance width of `ch` at `scale`, or `None` if the font has no
    /// entry for it.
    fn advance_width(&self, ch: char, scale: f32) -> Option<f32>;

    /// Line height at `scale`.
    fn line_height(&self, scale: f32) -> f32;

    /// Total advance of `text`, skipping characters without metrics.
    fn text_width(&self, text: &str, scale: f32) -> f32 {
        text.chars()
            .filter_map(|ch| self.advance_width(ch, scale))
            .sum()
    }
}

/// Truncate `text` so that it fits in `max_width`, appending an ellipsis.
///
/// Returns the text unchanged when it already fits. When even the ellipsis
/// does not fit, returns just the ellipsis.
pub fn truncate_to_width(text: &str, max_width: f32, metrics: &dyn TextMetrics, scale: f32) -> String {
    const ELLIPSIS: &str = "...";

    if text.is_empty() || metrics.text_width(text, scale) <= max_width {
        return text.to_string();
    }

    let ellipsis_width = metrics.text_width(ELLIPSIS, scale);
    if max_width <= ellipsis_width {
        return ELLIPSIS.to_string();
    }

    let mut truncated = String::new();
    let mut current_width = 0.0;

    for ch in text.chars() {
        if let Some(advance) = metrics.advance_width(ch, scale) {
            if current_width + advance + ellipsis_width > max_width {
                break;
            }
            current_width += advance;
        }
        truncated.push(ch);
    }

    truncated.push_str(ELLIPSIS);
    truncated
}

/// A fixed-pitch metrics provider for tests and hosts without a font stack.
///
/// Every character advances by `cell_width` times its terminal cell width,
/// so wide characters take two cells. Control characters have no metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of a single-cell character at scale 1.0.
    pub cell_width: f32,
    /// Line height at scale 1.0.
    pub line_height: f32,
}

impl MonospaceMetrics {
    /// Create a provider with the given cell width and line height.
    #[must_use]
    pub const fn new(cell_width: f32, line_height: f32) -> Self {
        Self {
            cell_width,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn advance_width(&self, ch: char, scale: f32) -> Option<f32> {
        let cells = ch.width()?;
        Some(cells as f32 * self.cell_width * scale)
    }

    fn line_height(&self, scale: f32) -> f32 {
        self.line_height * scale
    }
}

#[cfg(test)]
mod tests {
    use super::{MonospaceMetrics, TextMetrics, truncate_to_width};

    #[test]
    fn monospace_advances() {
        let m = MonospaceMetrics::new(8.0, 16.0);
        assert_eq!(m.advance_width('a', 1.0), Some(8.0));
        assert_eq!(m.advance_width('a', 2.0), Some(16.0));
        // Wide CJK character takes two cells.
        assert_eq!(m.advance_width('漢', 1.0), Some(16.0));
        // Control characters have no metrics.
        assert_eq!(m.advance_width('\u{7}', 1.0), None);
    }

    #[test]
    fn text_width_skips_missing_metrics() {
        let m = MonospaceMetrics::new(10.0, 16.0);
        assert_eq!(m.text_width("ab\u{7}c", 1.0), 30.0);
    }

    #[test]
    fn truncate_fits_unchanged() {
        let m = MonospaceMetrics::new(10.0, 16.0);
        assert_eq!(truncate_to_width("hello", 100.0, &m, 1.0), "hello");
    }

    #[test]
    fn truncate_appends_ellipsis_when_tight() {
        let m = MonospaceMetrics::new(10.0, 16.0);
        // 65 units: ellipsis takes 30, leaving room for 3 characters.
        let out = truncate_to_width("abcdefgh", 65.0, &m, 1.0);
        assert_eq!(out, "abc...");
        assert!(m.text_width(&out, 1.0) <= 65.0);
    }

    #[test]
    fn truncate_degenerate_width_is_ellipsis() {
        let m = MonospaceMetrics::new(10.0, 16.0);
        assert_eq!(truncate_to_width("abcdefgh", 20.0, &m, 1.0), "...");
    }
}
