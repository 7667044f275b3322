//! Text measurement and fitting.
//!
//! Font rasterisation belongs to the host. The skin only needs text
//! extents, which a host supplies through [`TextMetrics`].

use kurbo::Size;

/// Font size decrement used when shrinking text to fit.
pub const FONT_STEP: f64 = 0.005;

/// Smallest decrement as a fraction of the current font size.
const RELATIVE_STEP: f64 = 1e-4;

/// Measures the layout bounds of a single line of text.
pub trait TextMetrics {
    /// Size of `text` rendered at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// Fixed per-glyph advance; good enough when no font is at hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMetrics {
    /// Glyph advance in em.
    pub advance: f64,
    /// Line height in em.
    pub line_height: f64,
}

impl Default for ApproximateMetrics {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_height: 1.2,
        }
    }
}

impl TextMetrics for ApproximateMetrics {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let glyphs = text.chars().count() as f64;
        Size::new(glyphs * self.advance * font_size, self.line_height * font_size)
    }
}

/// Shrinks `font_size` until `text` is no wider than `max_width`. Never
/// returns less than zero.
///
/// Oversized text first jumps to the size its measured width scales to, then
/// steps down by [`FONT_STEP`] (or a small fraction of the font size, for
/// very large faces) until it fits.
pub fn fit_font_size(
    metrics: &impl TextMetrics,
    text: &str,
    max_width: f64,
    font_size: f64,
) -> f64 {
    let width = metrics.measure(text, font_size).width;
    if font_size <= 0.0 || width <= max_width {
        return font_size.max(0.0);
    }
    if max_width <= 0.0 || !width.is_finite() {
        return 0.0;
    }

    let mut font_size = font_size * max_width / width;
    while font_size > 0.0 && metrics.measure(text, font_size).width > max_width {
        font_size -= FONT_STEP.max(font_size * RELATIVE_STEP);
    }
    font_size.max(0.0)
}
