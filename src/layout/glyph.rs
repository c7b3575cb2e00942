//! Positioned glyphs and per-page glyph layouts.
//!
//! A [`Glyph`] is one rendered character with its box on the page. A
//! [`PageLayout`] is the ordered glyph sequence of one page together with
//! the page height and the vertical convention its coordinates use.

use crate::geometry::{Axis, Point, Rect};
use serde::{Deserialize, Serialize};

/// A single character with its position on the page.
///
/// `x` is the left edge of the glyph and `y` its baseline, both in the
/// axis of the [`PageLayout`] the glyph belongs to. The glyph extends
/// `height` above the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// The character itself
    pub character: char,
    /// Left edge x-coordinate
    pub x: f32,
    /// Baseline y-coordinate
    pub y: f32,
    /// Advance width of the glyph
    pub width: f32,
    /// Height above the baseline
    pub height: f32,
    /// Zero-based page index
    #[serde(default)]
    pub page_index: usize,
}

impl Glyph {
    /// Create a new glyph.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::layout::Glyph;
    ///
    /// let glyph = Glyph::new('A', 72.0, 100.0, 8.0, 12.0, 0);
    /// assert_eq!(glyph.character, 'A');
    /// assert_eq!(glyph.right(), 80.0);
    /// ```
    pub fn new(character: char, x: f32, y: f32, width: f32, height: f32, page_index: usize) -> Self {
        Self {
            character,
            x,
            y,
            width,
            height,
            page_index,
        }
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Glyph box in top-down page space.
    ///
    /// `axis` is the convention `self.y` is expressed in.
    pub fn top_down_rect(&self, axis: Axis, page_height: f32) -> Rect {
        let baseline = axis.convert(self.y, Axis::TopDown, page_height);
        Rect::new(self.x, baseline - self.height, self.width, self.height)
    }

    /// Visual centre of the glyph in top-down page space.
    ///
    /// `cx = x + width / 2` and `cy = baseline - height / 2`, where the
    /// baseline has first been brought into top-down space.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlights::geometry::Axis;
    /// use pdf_highlights::layout::Glyph;
    ///
    /// let glyph = Glyph::new('A', 10.0, 700.0, 8.0, 12.0, 0);
    /// let center = glyph.center(Axis::BottomUp, 792.0);
    /// assert_eq!(center.x, 14.0);
    /// assert_eq!(center.y, 86.0); // (792 - 700) - 6
    /// ```
    pub fn center(&self, axis: Axis, page_height: f32) -> Point {
        self.top_down_rect(axis, page_height).center()
    }

    /// Upper and lower vertical edges in the glyph's own axis.
    ///
    /// Returns `(top, bottom)`: the visually upper edge first.
    pub fn vertical_edges(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::TopDown => (self.y - self.height, self.y),
            Axis::BottomUp => (self.y + self.height, self.y),
        }
    }
}

/// The ordered glyph sequence of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Zero-based page index
    pub page_index: usize,
    /// Page (media box) height used for axis conversion
    pub page_height: f32,
    /// Vertical convention of the glyph coordinates
    pub axis: Axis,
    /// Glyphs in reading order
    pub glyphs: Vec<Glyph>,
}

impl PageLayout {
    /// Create a layout from glyphs already in reading order.
    pub fn new(page_index: usize, page_height: f32, axis: Axis, glyphs: Vec<Glyph>) -> Self {
        Self {
            page_index,
            page_height,
            axis,
            glyphs,
        }
    }

    /// A layout with no glyphs (page without a text layer).
    pub fn empty(page_index: usize, page_height: f32, axis: Axis) -> Self {
        Self::new(page_index, page_height, axis, Vec::new())
    }

    /// Number of glyphs on the page.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the page has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The page text, characters concatenated in reading order.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.character).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_top_down() {
        // Baseline at 100 measured from the top, glyph 12 tall
        let glyph = Glyph::new('H', 10.0, 100.0, 8.0, 12.0, 0);
        let center = glyph.center(Axis::TopDown, 792.0);
        assert_eq!(center.x, 14.0);
        assert_eq!(center.y, 94.0);
    }

    #[test]
    fn test_center_bottom_up_matches_top_down() {
        let top_down = Glyph::new('H', 10.0, 100.0, 8.0, 12.0, 0);
        let bottom_up = Glyph::new('H', 10.0, 692.0, 8.0, 12.0, 0);
        assert_eq!(
            top_down.center(Axis::TopDown, 792.0),
            bottom_up.center(Axis::BottomUp, 792.0)
        );
    }

    #[test]
    fn test_vertical_edges() {
        let glyph = Glyph::new('x', 0.0, 100.0, 5.0, 10.0, 0);
        assert_eq!(glyph.vertical_edges(Axis::TopDown), (90.0, 100.0));
        assert_eq!(glyph.vertical_edges(Axis::BottomUp), (110.0, 100.0));
    }

    #[test]
    fn test_page_layout_text_preserves_order() {
        let glyphs = vec![
            Glyph::new('b', 20.0, 10.0, 5.0, 10.0, 0),
            Glyph::new('a', 10.0, 10.0, 5.0, 10.0, 0),
        ];
        let layout = PageLayout::new(0, 100.0, Axis::TopDown, glyphs);
        assert_eq!(layout.text(), "ba");
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn test_empty_layout() {
        let layout = PageLayout::empty(4, 792.0, Axis::BottomUp);
        assert!(layout.is_empty());
        assert_eq!(layout.text(), "");
        assert_eq!(layout.page_index, 4);
    }
}
